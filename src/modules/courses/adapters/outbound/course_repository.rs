use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::courses::core::course::CourseRow;
use crate::shared::infrastructure::repository::RepositoryError;

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Fails with `Conflict` when another course already uses the name.
    async fn insert(&self, row: CourseRow) -> Result<(), RepositoryError>;

    async fn update(&self, row: CourseRow) -> Result<(), RepositoryError>;

    async fn delete(&self, course_id: &str) -> Result<(), RepositoryError>;

    async fn get(&self, course_id: &str) -> Result<CourseRow, RepositoryError>;

    async fn list(&self) -> Result<Vec<CourseRow>, RepositoryError>;

    /// Courses whose `[start_date, end_date]` run overlaps `[start, end]`.
    async fn list_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CourseRow>, RepositoryError>;
}
