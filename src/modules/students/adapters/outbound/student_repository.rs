use async_trait::async_trait;

use crate::modules::students::core::student::StudentRow;
use crate::shared::infrastructure::repository::RepositoryError;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Fails with `Conflict` when the phone or national id belongs to another student.
    async fn insert(&self, row: StudentRow) -> Result<(), RepositoryError>;

    async fn update(&self, row: StudentRow) -> Result<(), RepositoryError>;

    async fn delete(&self, student_id: &str) -> Result<(), RepositoryError>;

    async fn get(&self, student_id: &str) -> Result<StudentRow, RepositoryError>;

    async fn list(&self) -> Result<Vec<StudentRow>, RepositoryError>;
}
