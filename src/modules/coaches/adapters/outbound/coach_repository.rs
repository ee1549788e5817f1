use async_trait::async_trait;

use crate::modules::coaches::core::coach::CoachRow;
use crate::shared::infrastructure::repository::RepositoryError;

#[async_trait]
pub trait CoachRepository: Send + Sync {
    /// Fails with `Conflict` when another coach already uses the phone.
    async fn insert(&self, row: CoachRow) -> Result<(), RepositoryError>;

    async fn update(&self, row: CoachRow) -> Result<(), RepositoryError>;

    async fn delete(&self, coach_id: &str) -> Result<(), RepositoryError>;

    async fn get(&self, coach_id: &str) -> Result<CoachRow, RepositoryError>;

    /// Sorted by first name, then last name.
    async fn list(&self) -> Result<Vec<CoachRow>, RepositoryError>;
}
