// In memory meetings and attendance sheets.

use tokio::sync::RwLock;

use crate::modules::courses::adapters::outbound::meeting_repository::MeetingRepository;
use crate::modules::courses::core::meeting::{AttendanceRow, MeetingRow};
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Default)]
struct Store {
    meetings: Vec<MeetingRow>,
    attendance: Vec<AttendanceRow>,
}

#[derive(Default)]
pub struct InMemoryMeetings {
    store: RwLock<Store>,
    is_offline: bool,
}

impl InMemoryMeetings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Meeting repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MeetingRepository for InMemoryMeetings {
    async fn insert(
        &self,
        meeting: MeetingRow,
        attendance: Vec<AttendanceRow>,
    ) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut store = self.store.write().await;
        if store.meetings.iter().any(|m| m.id == meeting.id) {
            return Err(RepositoryError::Conflict(format!(
                "meeting id '{}' already exists",
                meeting.id
            )));
        }
        store.meetings.push(meeting);
        store.attendance.extend(attendance);
        Ok(())
    }

    async fn get(&self, meeting_id: &str) -> Result<MeetingRow, RepositoryError> {
        self.ensure_online()?;
        self.store
            .read()
            .await
            .meetings
            .iter()
            .find(|m| m.id == meeting_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("meeting {meeting_id}")))
    }

    async fn list_by_course(&self, course_id: &str) -> Result<Vec<MeetingRow>, RepositoryError> {
        self.ensure_online()?;
        let store = self.store.read().await;
        let mut meetings: Vec<MeetingRow> = store
            .meetings
            .iter()
            .filter(|m| m.course_id == course_id)
            .cloned()
            .collect();
        meetings.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(meetings)
    }

    async fn attendance(&self, meeting_id: &str) -> Result<Vec<AttendanceRow>, RepositoryError> {
        self.ensure_online()?;
        let store = self.store.read().await;
        Ok(store
            .attendance
            .iter()
            .filter(|a| a.meeting_id == meeting_id)
            .cloned()
            .collect())
    }

    async fn set_attendance(
        &self,
        meeting_id: &str,
        student_id: &str,
        present: bool,
    ) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        let mut store = self.store.write().await;
        let row = store
            .attendance
            .iter_mut()
            .find(|a| a.meeting_id == meeting_id && a.student_id == student_id);
        Ok(match row {
            Some(row) => {
                row.present = present;
                true
            }
            None => false,
        })
    }

    async fn delete(&self, meeting_id: &str) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        let mut store = self.store.write().await;
        let before = store.meetings.len();
        store.meetings.retain(|m| m.id != meeting_id);
        if store.meetings.len() == before {
            return Err(RepositoryError::NotFound(format!("meeting {meeting_id}")));
        }
        let before = store.attendance.len();
        store.attendance.retain(|a| a.meeting_id != meeting_id);
        Ok(before - store.attendance.len())
    }

    async fn delete_by_course(&self, course_id: &str) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        let mut store = self.store.write().await;
        let (removed, kept): (Vec<MeetingRow>, Vec<MeetingRow>) =
            std::mem::take(&mut store.meetings)
                .into_iter()
                .partition(|m| m.course_id == course_id);
        store.meetings = kept;
        store
            .attendance
            .retain(|a| !removed.iter().any(|m| m.id == a.meeting_id));
        Ok(removed.len())
    }

    async fn delete_attendance_by_student(
        &self,
        student_id: &str,
    ) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        let mut store = self.store.write().await;
        let before = store.attendance.len();
        store.attendance.retain(|a| a.student_id != student_id);
        Ok(before - store.attendance.len())
    }
}

#[cfg(test)]
mod in_memory_meetings_tests {
    use super::*;
    use crate::modules::courses::core::meeting::roll_call;
    use crate::tests::fixtures::meetings::make_meeting_row;
    use rstest::rstest;

    fn students(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|id| id.to_string()).collect()
    }

    async fn seeded() -> InMemoryMeetings {
        let repository = InMemoryMeetings::new();
        let enrolled = students(&["student-1", "student-2"]);
        for (id, course_id, held_on) in [
            ("m-1", "course-a", "2025-07-01"),
            ("m-2", "course-a", "2025-07-08"),
            ("m-3", "course-b", "2025-07-02"),
        ] {
            repository
                .insert(
                    make_meeting_row(id, course_id, held_on),
                    roll_call(id, &enrolled, &students(&["student-1"])),
                )
                .await
                .unwrap();
        }
        repository
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_the_meetings_of_a_course_newest_first() {
        let repository = seeded().await;
        let ids: Vec<String> = repository
            .list_by_course("course-a")
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["m-2", "m-1"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_only_update_existing_attendance_rows() {
        let repository = seeded().await;
        assert!(repository.set_attendance("m-1", "student-2", true).await.unwrap());
        assert!(!repository.set_attendance("m-1", "student-9", true).await.unwrap());

        let sheet = repository.attendance("m-1").await.unwrap();
        assert!(sheet.iter().all(|row| row.present));
        assert_eq!(sheet.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_meetings_with_their_sheets() {
        let repository = seeded().await;
        assert_eq!(repository.delete("m-3").await.unwrap(), 2);
        assert!(matches!(
            repository.delete("m-3").await,
            Err(RepositoryError::NotFound(_))
        ));

        assert_eq!(repository.delete_by_course("course-a").await.unwrap(), 2);
        assert!(repository.attendance("m-1").await.unwrap().is_empty());
        assert!(repository.list_by_course("course-a").await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_the_attendance_of_a_student() {
        let repository = seeded().await;
        assert_eq!(
            repository.delete_attendance_by_student("student-1").await.unwrap(),
            3
        );
        let sheet = repository.attendance("m-2").await.unwrap();
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet[0].student_id, "student-2");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline() {
        let mut repository = InMemoryMeetings::new();
        repository.toggle_offline();
        assert_eq!(
            repository.get("m-1").await,
            Err(RepositoryError::Backend("Meeting repository offline".into()))
        );
    }
}
