// Course roster: the students enrolled in one course, with their enrollment ids.

use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::adapters::outbound::enrollment_repository::EnrollmentRepository;
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::student::StudentRow;
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub enrollment_id: String,
    pub student: StudentRow,
}

pub struct CourseRosterHandler<TCourses, TEnrollments, TStudents>
where
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TStudents: StudentRepository + 'static,
{
    courses: Arc<TCourses>,
    enrollments: Arc<TEnrollments>,
    students: Arc<TStudents>,
}

impl<TCourses, TEnrollments, TStudents> CourseRosterHandler<TCourses, TEnrollments, TStudents>
where
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TStudents: StudentRepository + 'static,
{
    pub fn new(
        courses: Arc<TCourses>,
        enrollments: Arc<TEnrollments>,
        students: Arc<TStudents>,
    ) -> Self {
        Self {
            courses,
            enrollments,
            students,
        }
    }

    /// Enrollments whose student record is gone are skipped.
    pub async fn roster(&self, course_id: &str) -> Result<Vec<RosterEntry>, ApplicationError> {
        self.courses.get(course_id).await?;
        let mut students: HashMap<String, StudentRow> = self
            .students
            .list()
            .await?
            .into_iter()
            .map(|s| (s.id.clone(), s))
            .collect();

        let enrollments = self.enrollments.list_by_course(course_id).await?;
        let mut roster = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            match students.remove(&enrollment.student_id) {
                Some(student) => roster.push(RosterEntry {
                    enrollment_id: enrollment.id,
                    student,
                }),
                None => tracing::warn!(
                    enrollment_id = %enrollment.id,
                    student_id = %enrollment.student_id,
                    "enrollment without student record"
                ),
            }
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod course_roster_handler_tests {
    use super::*;
    use crate::modules::courses::adapters::outbound::course_repository_in_memory::InMemoryCourses;
    use crate::modules::courses::adapters::outbound::enrollment_repository_in_memory::InMemoryEnrollments;
    use crate::modules::students::adapters::outbound::student_repository_in_memory::InMemoryStudents;
    use crate::shared::infrastructure::repository::RepositoryError;
    use crate::tests::fixtures::courses::CourseRowBuilder;
    use crate::tests::fixtures::enrollments::make_enrollment_row;
    use crate::tests::fixtures::students::make_student_row;
    use rstest::rstest;

    type Handler = CourseRosterHandler<InMemoryCourses, InMemoryEnrollments, InMemoryStudents>;

    async fn handler() -> Handler {
        let courses = Arc::new(InMemoryCourses::new());
        courses.insert(CourseRowBuilder::new().build()).await.unwrap();
        let students = Arc::new(InMemoryStudents::new());
        for (id, name) in [("student-1", "Noam"), ("student-2", "Maya")] {
            students.insert(make_student_row(id, name)).await.unwrap();
        }
        let enrollments = Arc::new(InMemoryEnrollments::new());
        for (id, course, student) in [
            ("e-1", "course-fixed-0001", "student-1"),
            ("e-2", "course-other", "student-2"),
            ("e-3", "course-fixed-0001", "student-ghost"),
        ] {
            enrollments
                .insert(make_enrollment_row(id, course, student))
                .await
                .unwrap();
        }
        CourseRosterHandler::new(courses, enrollments, students)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_enrolled_students_with_their_enrollment() {
        let roster = handler().await.roster("course-fixed-0001").await.unwrap();
        assert_eq!(
            roster,
            vec![RosterEntry {
                enrollment_id: "e-1".into(),
                student: make_student_row("student-1", "Noam"),
            }]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_unknown_course() {
        let result = handler().await.roster("missing").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Repository(RepositoryError::NotFound(_)))
        ));
    }
}
