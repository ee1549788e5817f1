use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::payments::core::payment::PaymentRow;
use crate::shared::infrastructure::repository::RepositoryError;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn insert(&self, row: PaymentRow) -> Result<(), RepositoryError>;

    async fn delete(&self, payment_id: &str) -> Result<(), RepositoryError>;

    async fn delete_by_course(&self, course_id: &str) -> Result<usize, RepositoryError>;

    async fn delete_by_student(&self, student_id: &str) -> Result<usize, RepositoryError>;

    /// Payments of one student, newest first.
    async fn list_by_student(&self, student_id: &str) -> Result<Vec<PaymentRow>, RepositoryError>;

    /// Payments on or after `since`, newest first. `None` lists everything.
    async fn list_since(
        &self,
        since: Option<NaiveDate>,
    ) -> Result<Vec<PaymentRow>, RepositoryError>;
}
