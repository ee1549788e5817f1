use crate::modules::coaches::core::coach::{CoachError, CoachRow};
use crate::modules::coaches::use_cases::update_coach::command::UpdateCoach;

pub fn decide_update(current: CoachRow, command: UpdateCoach) -> Result<CoachRow, CoachError> {
    CoachRow {
        id: current.id,
        first_name: command.first_name.unwrap_or(current.first_name),
        last_name: command.last_name.unwrap_or(current.last_name),
        phone: command.phone.unwrap_or(current.phone),
    }
    .validate()
}
