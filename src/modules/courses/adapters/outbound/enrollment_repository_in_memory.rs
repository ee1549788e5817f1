// In memory enrollment repository.
//
// Purpose
// - Supply enrollments and the per course enrolled counts used by the calendar.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::modules::courses::adapters::outbound::enrollment_repository::{
    EnrollmentRepository, EnrollmentRow,
};
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Default)]
pub struct InMemoryEnrollments {
    rows: RwLock<Vec<EnrollmentRow>>,
    is_offline: bool,
}

impl InMemoryEnrollments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend(
                "Enrollment repository offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EnrollmentRepository for InMemoryEnrollments {
    async fn insert(&self, row: EnrollmentRow) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard
            .iter()
            .any(|e| e.course_id == row.course_id && e.student_id == row.student_id)
        {
            return Err(RepositoryError::Conflict(format!(
                "student {} is already enrolled in course {}",
                row.student_id, row.course_id
            )));
        }
        guard.push(row);
        Ok(())
    }

    async fn delete(&self, enrollment_id: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.len();
        guard.retain(|e| e.id != enrollment_id);
        if guard.len() == before {
            return Err(RepositoryError::NotFound(format!(
                "enrollment {enrollment_id}"
            )));
        }
        Ok(())
    }

    async fn delete_by_course(&self, course_id: &str) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.len();
        guard.retain(|e| e.course_id != course_id);
        Ok(before - guard.len())
    }

    async fn delete_by_student(&self, student_id: &str) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.len();
        guard.retain(|e| e.student_id != student_id);
        Ok(before - guard.len())
    }

    async fn list(&self) -> Result<Vec<EnrollmentRow>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.clone())
    }

    async fn list_by_course(&self, course_id: &str) -> Result<Vec<EnrollmentRow>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard.iter().filter(|e| e.course_id == course_id).cloned().collect())
    }

    async fn list_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<EnrollmentRow>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard.iter().filter(|e| e.student_id == student_id).cloned().collect())
    }

    async fn counts_by_course(
        &self,
        course_ids: &[String],
    ) -> Result<HashMap<String, u32>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut counts = HashMap::new();
        for row in guard.iter().filter(|e| course_ids.contains(&e.course_id)) {
            *counts.entry(row.course_id.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
