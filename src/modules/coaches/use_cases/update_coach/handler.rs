use std::sync::Arc;

use crate::modules::coaches::adapters::outbound::coach_repository::CoachRepository;
use crate::modules::coaches::core::coach::CoachRow;
use crate::modules::coaches::use_cases::update_coach::command::UpdateCoach;
use crate::modules::coaches::use_cases::update_coach::decide::decide_update;
use crate::shared::core::errors::ApplicationError;

pub struct UpdateCoachHandler<TCoaches>
where
    TCoaches: CoachRepository + 'static,
{
    coaches: Arc<TCoaches>,
}

impl<TCoaches> UpdateCoachHandler<TCoaches>
where
    TCoaches: CoachRepository + 'static,
{
    pub fn new(coaches: Arc<TCoaches>) -> Self {
        Self { coaches }
    }

    pub async fn handle(&self, command: UpdateCoach) -> Result<CoachRow, ApplicationError> {
        let current = self.coaches.get(&command.coach_id).await?;
        let row = decide_update(current, command).map_err(ApplicationError::domain)?;
        self.coaches.update(row.clone()).await?;
        tracing::info!(coach_id = %row.id, "coach updated");
        Ok(row)
    }
}
