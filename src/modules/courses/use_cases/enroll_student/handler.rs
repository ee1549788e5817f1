// Enroll student handler.
//
// Responsibilities
// - Reject blank student ids, unknown students and unknown courses.
// - A student is enrolled at most once per course; the repository reports duplicates.

use std::sync::Arc;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::adapters::outbound::enrollment_repository::{
    EnrollmentRepository, EnrollmentRow,
};
use crate::modules::courses::use_cases::enroll_student::command::EnrollStudent;
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::shared::core::errors::ApplicationError;

pub struct EnrollStudentHandler<TCourses, TStudents, TEnrollments>
where
    TCourses: CourseRepository + 'static,
    TStudents: StudentRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
{
    courses: Arc<TCourses>,
    students: Arc<TStudents>,
    enrollments: Arc<TEnrollments>,
}

impl<TCourses, TStudents, TEnrollments> EnrollStudentHandler<TCourses, TStudents, TEnrollments>
where
    TCourses: CourseRepository + 'static,
    TStudents: StudentRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
{
    pub fn new(
        courses: Arc<TCourses>,
        students: Arc<TStudents>,
        enrollments: Arc<TEnrollments>,
    ) -> Self {
        Self {
            courses,
            students,
            enrollments,
        }
    }

    pub async fn handle(&self, command: EnrollStudent) -> Result<EnrollmentRow, ApplicationError> {
        let student_id = command.student_id.trim();
        if student_id.is_empty() {
            return Err(ApplicationError::domain("student id must not be blank"));
        }
        self.students.get(student_id).await?;
        self.courses.get(&command.course_id).await?;

        let row = EnrollmentRow {
            id: command.enrollment_id,
            course_id: command.course_id,
            student_id: student_id.to_string(),
            enrollment_date: command.enrollment_date,
        };
        self.enrollments.insert(row.clone()).await?;
        tracing::info!(
            enrollment_id = %row.id,
            course_id = %row.course_id,
            student_id = %row.student_id,
            "student enrolled"
        );
        Ok(row)
    }
}
