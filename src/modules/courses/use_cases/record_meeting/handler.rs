// Record meeting handler.
//
// Responsibilities
// - The course must exist.
// - The attendance sheet covers the students enrolled when the meeting is recorded.

use std::sync::Arc;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::adapters::outbound::enrollment_repository::EnrollmentRepository;
use crate::modules::courses::adapters::outbound::meeting_repository::MeetingRepository;
use crate::modules::courses::core::meeting::{MeetingRow, roll_call};
use crate::modules::courses::use_cases::record_meeting::command::RecordMeeting;
use crate::shared::core::errors::ApplicationError;

pub struct RecordMeetingHandler<TCourses, TEnrollments, TMeetings>
where
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TMeetings: MeetingRepository + 'static,
{
    courses: Arc<TCourses>,
    enrollments: Arc<TEnrollments>,
    meetings: Arc<TMeetings>,
}

impl<TCourses, TEnrollments, TMeetings> RecordMeetingHandler<TCourses, TEnrollments, TMeetings>
where
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TMeetings: MeetingRepository + 'static,
{
    pub fn new(
        courses: Arc<TCourses>,
        enrollments: Arc<TEnrollments>,
        meetings: Arc<TMeetings>,
    ) -> Self {
        Self {
            courses,
            enrollments,
            meetings,
        }
    }

    pub async fn handle(&self, command: RecordMeeting) -> Result<MeetingRow, ApplicationError> {
        self.courses.get(&command.course_id).await?;
        let enrolled: Vec<String> = self
            .enrollments
            .list_by_course(&command.course_id)
            .await?
            .into_iter()
            .map(|e| e.student_id)
            .collect();

        let meeting = MeetingRow {
            id: command.meeting_id,
            course_id: command.course_id,
            date: command.date,
            notes: command.notes.trim().to_string(),
        };
        let sheet = roll_call(&meeting.id, &enrolled, &command.present);
        let present = sheet.iter().filter(|row| row.present).count();
        self.meetings.insert(meeting.clone(), sheet).await?;
        tracing::info!(
            meeting_id = %meeting.id,
            course_id = %meeting.course_id,
            date = %meeting.date,
            enrolled = enrolled.len(),
            present,
            "meeting recorded"
        );
        Ok(meeting)
    }
}
