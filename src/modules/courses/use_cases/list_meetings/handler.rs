// List meetings handler.
//
// Responsibilities
// - Meetings of one course, newest first, each with its attendance sheet.
// - Student names are resolved from the student records. A removed student shows an empty name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::adapters::outbound::meeting_repository::MeetingRepository;
use crate::modules::courses::core::meeting::{AttendanceEntry, MeetingRecord};
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::shared::core::errors::ApplicationError;

pub struct ListMeetingsHandler<TCourses, TMeetings, TStudents>
where
    TCourses: CourseRepository + 'static,
    TMeetings: MeetingRepository + 'static,
    TStudents: StudentRepository + 'static,
{
    courses: Arc<TCourses>,
    meetings: Arc<TMeetings>,
    students: Arc<TStudents>,
}

impl<TCourses, TMeetings, TStudents> ListMeetingsHandler<TCourses, TMeetings, TStudents>
where
    TCourses: CourseRepository + 'static,
    TMeetings: MeetingRepository + 'static,
    TStudents: StudentRepository + 'static,
{
    pub fn new(
        courses: Arc<TCourses>,
        meetings: Arc<TMeetings>,
        students: Arc<TStudents>,
    ) -> Self {
        Self {
            courses,
            meetings,
            students,
        }
    }

    pub async fn list(&self, course_id: &str) -> Result<Vec<MeetingRecord>, ApplicationError> {
        self.courses.get(course_id).await?;
        let names: HashMap<String, String> = self
            .students
            .list()
            .await?
            .into_iter()
            .map(|s| (s.id.clone(), s.full_name()))
            .collect();

        let mut records = Vec::new();
        for meeting in self.meetings.list_by_course(course_id).await? {
            let attendance = self
                .meetings
                .attendance(&meeting.id)
                .await?
                .into_iter()
                .map(|row| AttendanceEntry {
                    student_name: names.get(&row.student_id).cloned().unwrap_or_default(),
                    student_id: row.student_id,
                    present: row.present,
                })
                .collect();
            records.push(MeetingRecord {
                id: meeting.id,
                date: meeting.date,
                notes: meeting.notes,
                attendance,
            });
        }
        Ok(records)
    }
}
