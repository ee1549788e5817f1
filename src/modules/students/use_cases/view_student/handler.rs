// Read side of a single student: payments made and courses enrolled in.

use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::adapters::outbound::enrollment_repository::EnrollmentRepository;
use crate::modules::courses::core::course::CourseRow;
use crate::modules::payments::adapters::outbound::payment_repository::PaymentRepository;
use crate::modules::payments::core::payment::PaymentRow;
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::shared::core::errors::ApplicationError;

pub struct ViewStudentHandler<TStudents, TCourses, TEnrollments, TPayments>
where
    TStudents: StudentRepository + 'static,
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    students: Arc<TStudents>,
    courses: Arc<TCourses>,
    enrollments: Arc<TEnrollments>,
    payments: Arc<TPayments>,
}

impl<TStudents, TCourses, TEnrollments, TPayments>
    ViewStudentHandler<TStudents, TCourses, TEnrollments, TPayments>
where
    TStudents: StudentRepository + 'static,
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    pub fn new(
        students: Arc<TStudents>,
        courses: Arc<TCourses>,
        enrollments: Arc<TEnrollments>,
        payments: Arc<TPayments>,
    ) -> Self {
        Self {
            students,
            courses,
            enrollments,
            payments,
        }
    }

    /// Newest first.
    pub async fn payments(&self, student_id: &str) -> Result<Vec<PaymentRow>, ApplicationError> {
        self.students.get(student_id).await?;
        Ok(self.payments.list_by_student(student_id).await?)
    }

    /// Sorted by course name.
    pub async fn courses(&self, student_id: &str) -> Result<Vec<CourseRow>, ApplicationError> {
        self.students.get(student_id).await?;
        let enrolled: HashSet<String> = self
            .enrollments
            .list_by_student(student_id)
            .await?
            .into_iter()
            .map(|e| e.course_id)
            .collect();
        let mut courses = self.courses.list().await?;
        courses.retain(|course| enrolled.contains(&course.id));
        Ok(courses)
    }
}
