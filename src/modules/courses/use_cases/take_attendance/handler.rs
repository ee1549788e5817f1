// Take attendance handler.
//
// Only students already on the meeting's sheet are updated; other marks are skipped.

use std::sync::Arc;

use crate::modules::courses::adapters::outbound::meeting_repository::MeetingRepository;
use crate::modules::courses::use_cases::take_attendance::command::TakeAttendance;
use crate::shared::core::errors::ApplicationError;

pub struct TakeAttendanceHandler<TMeetings>
where
    TMeetings: MeetingRepository + 'static,
{
    meetings: Arc<TMeetings>,
}

impl<TMeetings> TakeAttendanceHandler<TMeetings>
where
    TMeetings: MeetingRepository + 'static,
{
    pub fn new(meetings: Arc<TMeetings>) -> Self {
        Self { meetings }
    }

    /// Returns how many attendance rows were updated.
    pub async fn handle(&self, command: TakeAttendance) -> Result<usize, ApplicationError> {
        self.meetings.get(&command.meeting_id).await?;
        let mut updated = 0;
        for mark in &command.marks {
            if self
                .meetings
                .set_attendance(&command.meeting_id, &mark.student_id, mark.present)
                .await?
            {
                updated += 1;
            } else {
                tracing::debug!(
                    meeting_id = %command.meeting_id,
                    student_id = %mark.student_id,
                    "no attendance row for student"
                );
            }
        }
        tracing::info!(meeting_id = %command.meeting_id, updated, "attendance saved");
        Ok(updated)
    }
}
