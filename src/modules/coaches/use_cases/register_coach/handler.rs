use std::sync::Arc;

use crate::modules::coaches::adapters::outbound::coach_repository::CoachRepository;
use crate::modules::coaches::core::coach::CoachRow;
use crate::modules::coaches::use_cases::register_coach::command::RegisterCoach;
use crate::modules::coaches::use_cases::register_coach::decide::decide_register;
use crate::shared::core::errors::ApplicationError;

pub struct RegisterCoachHandler<TCoaches>
where
    TCoaches: CoachRepository + 'static,
{
    coaches: Arc<TCoaches>,
}

impl<TCoaches> RegisterCoachHandler<TCoaches>
where
    TCoaches: CoachRepository + 'static,
{
    pub fn new(coaches: Arc<TCoaches>) -> Self {
        Self { coaches }
    }

    pub async fn handle(&self, command: RegisterCoach) -> Result<CoachRow, ApplicationError> {
        let row = decide_register(command).map_err(ApplicationError::domain)?;
        self.coaches.insert(row.clone()).await?;
        tracing::info!(coach_id = %row.id, "coach registered");
        Ok(row)
    }
}
