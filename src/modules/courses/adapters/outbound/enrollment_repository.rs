use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnrollmentRow {
    pub id: String,
    pub course_id: String,
    pub student_id: String,
    pub enrollment_date: NaiveDate,
}

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Fails with `Conflict` when the student is already enrolled in the course.
    async fn insert(&self, row: EnrollmentRow) -> Result<(), RepositoryError>;

    async fn delete(&self, enrollment_id: &str) -> Result<(), RepositoryError>;

    /// Removes every enrollment of a course and returns how many were removed.
    async fn delete_by_course(&self, course_id: &str) -> Result<usize, RepositoryError>;

    /// Removes every enrollment of a student and returns how many were removed.
    async fn delete_by_student(&self, student_id: &str) -> Result<usize, RepositoryError>;

    async fn list(&self) -> Result<Vec<EnrollmentRow>, RepositoryError>;

    async fn list_by_course(&self, course_id: &str) -> Result<Vec<EnrollmentRow>, RepositoryError>;

    async fn list_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<EnrollmentRow>, RepositoryError>;

    /// Enrolled student count per course id. Courses without enrollments are absent.
    async fn counts_by_course(
        &self,
        course_ids: &[String],
    ) -> Result<HashMap<String, u32>, RepositoryError>;
}
