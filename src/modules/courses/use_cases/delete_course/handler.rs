// Delete course handler.
//
// Responsibilities
// - Remove the course together with its enrollments, meetings and payments.
// - Fail with NotFound before touching dependents when the course is unknown.
// - The steps are not atomic. A failing step is logged with what was already removed.

use std::sync::Arc;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::adapters::outbound::enrollment_repository::EnrollmentRepository;
use crate::modules::courses::adapters::outbound::meeting_repository::MeetingRepository;
use crate::modules::payments::adapters::outbound::payment_repository::PaymentRepository;
use crate::shared::core::errors::ApplicationError;

pub struct DeleteCourseHandler<TCourses, TEnrollments, TMeetings, TPayments>
where
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TMeetings: MeetingRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    courses: Arc<TCourses>,
    enrollments: Arc<TEnrollments>,
    meetings: Arc<TMeetings>,
    payments: Arc<TPayments>,
}

impl<TCourses, TEnrollments, TMeetings, TPayments>
    DeleteCourseHandler<TCourses, TEnrollments, TMeetings, TPayments>
where
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
    TMeetings: MeetingRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    pub fn new(
        courses: Arc<TCourses>,
        enrollments: Arc<TEnrollments>,
        meetings: Arc<TMeetings>,
        payments: Arc<TPayments>,
    ) -> Self {
        Self {
            courses,
            enrollments,
            meetings,
            payments,
        }
    }

    pub async fn handle(&self, course_id: &str) -> Result<(), ApplicationError> {
        self.courses.get(course_id).await?;

        let enrollments_removed = self
            .enrollments
            .delete_by_course(course_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    course_id,
                    error = %e,
                    step = "enrollments",
                    "course delete failed"
                )
            })?;
        let meetings_removed = self
            .meetings
            .delete_by_course(course_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    course_id,
                    error = %e,
                    step = "meetings",
                    enrollments_removed,
                    "course delete failed"
                )
            })?;
        let payments_removed = self
            .payments
            .delete_by_course(course_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    course_id,
                    error = %e,
                    step = "payments",
                    enrollments_removed,
                    meetings_removed,
                    "course delete failed"
                )
            })?;
        self.courses.delete(course_id).await.inspect_err(|e| {
            tracing::error!(
                course_id,
                error = %e,
                step = "course",
                enrollments_removed,
                meetings_removed,
                payments_removed,
                "course delete failed"
            )
        })?;

        tracing::info!(
            course_id,
            enrollments_removed,
            meetings_removed,
            payments_removed,
            "course deleted"
        );
        Ok(())
    }
}
