use async_trait::async_trait;

use crate::modules::courses::core::meeting::{AttendanceRow, MeetingRow};
use crate::shared::infrastructure::repository::RepositoryError;

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Stores the meeting together with its attendance sheet.
    async fn insert(
        &self,
        meeting: MeetingRow,
        attendance: Vec<AttendanceRow>,
    ) -> Result<(), RepositoryError>;

    async fn get(&self, meeting_id: &str) -> Result<MeetingRow, RepositoryError>;

    /// Meetings of a course, newest first.
    async fn list_by_course(&self, course_id: &str) -> Result<Vec<MeetingRow>, RepositoryError>;

    async fn attendance(&self, meeting_id: &str) -> Result<Vec<AttendanceRow>, RepositoryError>;

    /// Updates an existing attendance row. Returns false when the student has no row.
    async fn set_attendance(
        &self,
        meeting_id: &str,
        student_id: &str,
        present: bool,
    ) -> Result<bool, RepositoryError>;

    /// Removes the meeting and its sheet; returns the number of attendance rows removed.
    async fn delete(&self, meeting_id: &str) -> Result<usize, RepositoryError>;

    /// Removes every meeting of a course with their sheets; returns the number of meetings.
    async fn delete_by_course(&self, course_id: &str) -> Result<usize, RepositoryError>;

    async fn delete_attendance_by_student(
        &self,
        student_id: &str,
    ) -> Result<usize, RepositoryError>;
}
