// In memory course repository.
//
// Purpose
// - Back the course use cases in tests and local development without a database.
//
// Responsibilities
// - Store rows keyed by course id and enforce unique course names.
// - Return lists ordered by name so responses are deterministic.

use std::collections::HashMap;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::core::course::CourseRow;
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Default)]
pub struct InMemoryCourses {
    rows: RwLock<HashMap<String, CourseRow>>,
    is_offline: bool,
}

impl InMemoryCourses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Course repository offline".into()));
        }
        Ok(())
    }
}

fn name_taken(rows: &HashMap<String, CourseRow>, row: &CourseRow) -> bool {
    rows.values()
        .any(|existing| existing.id != row.id && existing.name == row.name)
}

fn sorted(mut rows: Vec<CourseRow>) -> Vec<CourseRow> {
    rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    rows
}

#[async_trait::async_trait]
impl CourseRepository for InMemoryCourses {
    async fn insert(&self, row: CourseRow) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.contains_key(&row.id) {
            return Err(RepositoryError::Conflict(format!(
                "course id '{}' already exists",
                row.id
            )));
        }
        if name_taken(&guard, &row) {
            return Err(RepositoryError::Conflict(format!(
                "course name '{}' must be unique",
                row.name
            )));
        }
        guard.insert(row.id.clone(), row);
        Ok(())
    }

    async fn update(&self, row: CourseRow) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if !guard.contains_key(&row.id) {
            return Err(RepositoryError::NotFound(format!("course {}", row.id)));
        }
        if name_taken(&guard, &row) {
            return Err(RepositoryError::Conflict(format!(
                "course name '{}' must be unique",
                row.name
            )));
        }
        guard.insert(row.id.clone(), row);
        Ok(())
    }

    async fn delete(&self, course_id: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.rows
            .write()
            .await
            .remove(course_id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("course {course_id}")))
    }

    async fn get(&self, course_id: &str) -> Result<CourseRow, RepositoryError> {
        self.ensure_online()?;
        self.rows
            .read()
            .await
            .get(course_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("course {course_id}")))
    }

    async fn list(&self) -> Result<Vec<CourseRow>, RepositoryError> {
        self.ensure_online()?;
        Ok(sorted(self.rows.read().await.values().cloned().collect()))
    }

    async fn list_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CourseRow>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(sorted(
            guard
                .values()
                .filter(|row| row.start_date <= end && row.end_date >= start)
                .cloned()
                .collect(),
        ))
    }
}
