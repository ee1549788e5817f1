// Delete student handler.
//
// Responsibilities
// - Remove the student together with their enrollments, payments and attendance rows.
// - Fail with NotFound before touching dependents when the student is unknown.
// - The steps are not atomic. A failing step is logged with what was already removed.

use std::sync::Arc;

use crate::modules::courses::adapters::outbound::enrollment_repository::EnrollmentRepository;
use crate::modules::courses::adapters::outbound::meeting_repository::MeetingRepository;
use crate::modules::payments::adapters::outbound::payment_repository::PaymentRepository;
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::shared::core::errors::ApplicationError;

pub struct DeleteStudentHandler<TStudents, TEnrollments, TMeetings, TPayments>
where
    TStudents: StudentRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TMeetings: MeetingRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    students: Arc<TStudents>,
    enrollments: Arc<TEnrollments>,
    meetings: Arc<TMeetings>,
    payments: Arc<TPayments>,
}

impl<TStudents, TEnrollments, TMeetings, TPayments>
    DeleteStudentHandler<TStudents, TEnrollments, TMeetings, TPayments>
where
    TStudents: StudentRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TMeetings: MeetingRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    pub fn new(
        students: Arc<TStudents>,
        enrollments: Arc<TEnrollments>,
        meetings: Arc<TMeetings>,
        payments: Arc<TPayments>,
    ) -> Self {
        Self {
            students,
            enrollments,
            meetings,
            payments,
        }
    }

    pub async fn handle(&self, student_id: &str) -> Result<(), ApplicationError> {
        self.students.get(student_id).await?;

        let enrollments_removed = self
            .enrollments
            .delete_by_student(student_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    student_id,
                    error = %e,
                    step = "enrollments",
                    "student delete failed"
                )
            })?;
        let payments_removed = self
            .payments
            .delete_by_student(student_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    student_id,
                    error = %e,
                    step = "payments",
                    enrollments_removed,
                    "student delete failed"
                )
            })?;
        let attendance_removed = self
            .meetings
            .delete_attendance_by_student(student_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    student_id,
                    error = %e,
                    step = "attendance",
                    enrollments_removed,
                    payments_removed,
                    "student delete failed"
                )
            })?;
        self.students.delete(student_id).await.inspect_err(|e| {
            tracing::error!(
                student_id,
                error = %e,
                step = "student",
                enrollments_removed,
                payments_removed,
                attendance_removed,
                "student delete failed"
            )
        })?;

        tracing::info!(
            student_id,
            enrollments_removed,
            payments_removed,
            attendance_removed,
            "student deleted"
        );
        Ok(())
    }
}
