// In memory coach repository. Phones are unique across coaches.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::modules::coaches::adapters::outbound::coach_repository::CoachRepository;
use crate::modules::coaches::core::coach::CoachRow;
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Default)]
pub struct InMemoryCoaches {
    rows: RwLock<HashMap<String, CoachRow>>,
    is_offline: bool,
}

impl InMemoryCoaches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Coach repository offline".into()));
        }
        Ok(())
    }
}

fn phone_taken(rows: &HashMap<String, CoachRow>, row: &CoachRow) -> bool {
    rows.values().any(|c| c.id != row.id && c.phone == row.phone)
}

#[async_trait::async_trait]
impl CoachRepository for InMemoryCoaches {
    async fn insert(&self, row: CoachRow) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.contains_key(&row.id) {
            return Err(RepositoryError::Conflict(format!(
                "coach id '{}' already exists",
                row.id
            )));
        }
        if phone_taken(&guard, &row) {
            return Err(RepositoryError::Conflict("coach phone must be unique".into()));
        }
        guard.insert(row.id.clone(), row);
        Ok(())
    }

    async fn update(&self, row: CoachRow) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if !guard.contains_key(&row.id) {
            return Err(RepositoryError::NotFound(format!("coach {}", row.id)));
        }
        if phone_taken(&guard, &row) {
            return Err(RepositoryError::Conflict("coach phone must be unique".into()));
        }
        guard.insert(row.id.clone(), row);
        Ok(())
    }

    async fn delete(&self, coach_id: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.rows
            .write()
            .await
            .remove(coach_id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("coach {coach_id}")))
    }

    async fn get(&self, coach_id: &str) -> Result<CoachRow, RepositoryError> {
        self.ensure_online()?;
        self.rows
            .read()
            .await
            .get(coach_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("coach {coach_id}")))
    }

    async fn list(&self) -> Result<Vec<CoachRow>, RepositoryError> {
        self.ensure_online()?;
        let mut rows: Vec<CoachRow> = self.rows.read().await.values().cloned().collect();
        rows.sort_by(|a, b| (&a.first_name, &a.last_name).cmp(&(&b.first_name, &b.last_name)));
        Ok(rows)
    }
}

#[cfg(test)]
mod in_memory_coaches_tests {
    use super::*;
    use crate::tests::fixtures::coaches::make_coach_row;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_phones_unique_on_insert_and_update() {
        let repository = InMemoryCoaches::new();
        repository
            .insert(make_coach_row("coach-1", "Dana", "Levi", "052-1"))
            .await
            .unwrap();
        repository
            .insert(make_coach_row("coach-2", "Avi", "Cohen", "052-2"))
            .await
            .unwrap();

        let clash = repository
            .insert(make_coach_row("coach-3", "Gil", "Bar", "052-1"))
            .await;
        assert_eq!(
            clash,
            Err(RepositoryError::Conflict("coach phone must be unique".into()))
        );
        let clash = repository
            .update(make_coach_row("coach-2", "Avi", "Cohen", "052-1"))
            .await;
        assert!(matches!(clash, Err(RepositoryError::Conflict(_))));

        repository
            .update(make_coach_row("coach-1", "Dana", "Levi", "052-1"))
            .await
            .unwrap();
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_by_name_and_delete() {
        let repository = InMemoryCoaches::new();
        repository
            .insert(make_coach_row("coach-1", "Dana", "Levi", "052-1"))
            .await
            .unwrap();
        repository
            .insert(make_coach_row("coach-2", "Avi", "Cohen", "052-2"))
            .await
            .unwrap();

        let names: Vec<String> = repository
            .list()
            .await
            .unwrap()
            .iter()
            .map(CoachRow::full_name)
            .collect();
        assert_eq!(names, vec!["Avi Cohen", "Dana Levi"]);

        repository.delete("coach-2").await.unwrap();
        assert!(matches!(
            repository.delete("coach-2").await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline() {
        let mut repository = InMemoryCoaches::new();
        repository.toggle_offline();
        assert_eq!(
            repository.get("coach-1").await,
            Err(RepositoryError::Backend("Coach repository offline".into()))
        );
    }
}
