use crate::modules::coaches::core::coach::{CoachError, CoachRow};
use crate::modules::coaches::use_cases::register_coach::command::RegisterCoach;

pub fn decide_register(command: RegisterCoach) -> Result<CoachRow, CoachError> {
    CoachRow {
        id: command.coach_id,
        first_name: command.first_name,
        last_name: command.last_name,
        phone: command.phone,
    }
    .validate()
}
