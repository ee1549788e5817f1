// In memory student repository. Phones and national ids are unique.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::student::StudentRow;
use crate::shared::infrastructure::repository::RepositoryError;

const DUPLICATE: &str = "student phone or national id must be unique";

#[derive(Default)]
pub struct InMemoryStudents {
    rows: RwLock<HashMap<String, StudentRow>>,
    is_offline: bool,
}

impl InMemoryStudents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Student repository offline".into()));
        }
        Ok(())
    }
}

fn clashes(rows: &HashMap<String, StudentRow>, row: &StudentRow) -> bool {
    rows.values().any(|existing| {
        existing.id != row.id
            && (existing.phone == row.phone
                || (existing.national_id.is_some() && existing.national_id == row.national_id))
    })
}

#[async_trait::async_trait]
impl StudentRepository for InMemoryStudents {
    async fn insert(&self, row: StudentRow) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.contains_key(&row.id) {
            return Err(RepositoryError::Conflict(format!(
                "student id '{}' already exists",
                row.id
            )));
        }
        if clashes(&guard, &row) {
            return Err(RepositoryError::Conflict(DUPLICATE.into()));
        }
        guard.insert(row.id.clone(), row);
        Ok(())
    }

    async fn update(&self, row: StudentRow) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if !guard.contains_key(&row.id) {
            return Err(RepositoryError::NotFound(format!("student {}", row.id)));
        }
        if clashes(&guard, &row) {
            return Err(RepositoryError::Conflict(DUPLICATE.into()));
        }
        guard.insert(row.id.clone(), row);
        Ok(())
    }

    async fn delete(&self, student_id: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.rows
            .write()
            .await
            .remove(student_id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("student {student_id}")))
    }

    async fn get(&self, student_id: &str) -> Result<StudentRow, RepositoryError> {
        self.ensure_online()?;
        self.rows
            .read()
            .await
            .get(student_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("student {student_id}")))
    }

    async fn list(&self) -> Result<Vec<StudentRow>, RepositoryError> {
        self.ensure_online()?;
        let mut rows: Vec<StudentRow> = self.rows.read().await.values().cloned().collect();
        rows.sort_by(|a, b| {
            (&a.first_name, &a.fathers_name, &a.id).cmp(&(&b.first_name, &b.fathers_name, &b.id))
        });
        Ok(rows)
    }
}
