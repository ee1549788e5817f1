// In memory payment ledger.

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::modules::payments::adapters::outbound::payment_repository::PaymentRepository;
use crate::modules::payments::core::payment::PaymentRow;
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Default)]
pub struct InMemoryPayments {
    rows: RwLock<Vec<PaymentRow>>,
    is_offline: bool,
}

impl InMemoryPayments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Payment repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PaymentRepository for InMemoryPayments {
    async fn insert(&self, row: PaymentRow) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.iter().any(|p| p.id == row.id) {
            return Err(RepositoryError::Conflict(format!("payment {}", row.id)));
        }
        guard.push(row);
        Ok(())
    }

    async fn delete(&self, payment_id: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.len();
        guard.retain(|p| p.id != payment_id);
        if guard.len() == before {
            return Err(RepositoryError::NotFound(format!("payment {payment_id}")));
        }
        Ok(())
    }

    async fn delete_by_course(&self, course_id: &str) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.len();
        guard.retain(|p| p.course_id != course_id);
        Ok(before - guard.len())
    }

    async fn delete_by_student(&self, student_id: &str) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.len();
        guard.retain(|p| p.student_id != student_id);
        Ok(before - guard.len())
    }

    async fn list_by_student(&self, student_id: &str) -> Result<Vec<PaymentRow>, RepositoryError> {
        let mut items = self.list_since(None).await?;
        items.retain(|p| p.student_id == student_id);
        Ok(items)
    }

    async fn list_since(
        &self,
        since: Option<NaiveDate>,
    ) -> Result<Vec<PaymentRow>, RepositoryError> {
        self.ensure_online()?;
        let mut items: Vec<PaymentRow> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|p| since.is_none_or(|since| p.payment_date >= since))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.payment_date.cmp(&a.payment_date).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }
}

#[cfg(test)]
mod in_memory_payments_tests {
    use super::*;
    use crate::tests::fixtures::payments::make_payment_row;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_list_payments_since_a_date_newest_first() {
        let repository = InMemoryPayments::new();
        for (id, paid_on) in [("p-1", "2025-06-30"), ("p-2", "2025-07-01"), ("p-3", "2025-07-15")] {
            repository
                .insert(make_payment_row(id, "course-a", 100.0, paid_on))
                .await
                .unwrap();
        }

        let since = NaiveDate::from_ymd_opt(2025, 7, 1);
        let ids: Vec<_> = repository
            .list_since(since)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p-3", "p-2"]);
        assert_eq!(repository.list_since(None).await.unwrap().len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_payments() {
        let repository = InMemoryPayments::new();
        repository
            .insert(make_payment_row("p-1", "course-a", 100.0, "2025-07-01"))
            .await
            .unwrap();
        repository
            .insert(make_payment_row("p-2", "course-b", 100.0, "2025-07-01"))
            .await
            .unwrap();

        repository.delete("p-1").await.unwrap();
        assert!(matches!(
            repository.delete("p-1").await,
            Err(RepositoryError::NotFound(_))
        ));
        assert_eq!(repository.delete_by_course("course-b").await.unwrap(), 1);
        assert!(repository.list_since(None).await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_and_delete_the_payments_of_a_student() {
        let repository = InMemoryPayments::new();
        let other = PaymentRow {
            student_id: "student-other".into(),
            ..make_payment_row("p-3", "course-a", 80.0, "2025-07-20")
        };
        repository.insert(other).await.unwrap();
        for (id, paid_on) in [("p-1", "2025-06-01"), ("p-2", "2025-07-01")] {
            repository
                .insert(make_payment_row(id, "course-a", 100.0, paid_on))
                .await
                .unwrap();
        }

        let ids: Vec<_> = repository
            .list_by_student("student-fixed-0001")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p-2", "p-1"]);
        assert_eq!(repository.delete_by_student("student-fixed-0001").await.unwrap(), 2);
        assert_eq!(repository.list_since(None).await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline() {
        let mut repository = InMemoryPayments::new();
        repository.toggle_offline();
        assert_eq!(
            repository.list_since(None).await,
            Err(RepositoryError::Backend("Payment repository offline".into()))
        );
    }
}
