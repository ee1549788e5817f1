// Record payment handler.
//
// Responsibilities
// - Validate the payment, check the student and course exist, then append it to the ledger.

use std::sync::Arc;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::payments::adapters::outbound::payment_repository::PaymentRepository;
use crate::modules::payments::core::payment::PaymentRow;
use crate::modules::payments::use_cases::record_payment::command::RecordPayment;
use crate::modules::payments::use_cases::record_payment::decide::decide_record;
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::shared::core::errors::ApplicationError;

pub struct RecordPaymentHandler<TCourses, TStudents, TPayments>
where
    TCourses: CourseRepository + 'static,
    TStudents: StudentRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    courses: Arc<TCourses>,
    students: Arc<TStudents>,
    payments: Arc<TPayments>,
}

impl<TCourses, TStudents, TPayments> RecordPaymentHandler<TCourses, TStudents, TPayments>
where
    TCourses: CourseRepository + 'static,
    TStudents: StudentRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    pub fn new(
        courses: Arc<TCourses>,
        students: Arc<TStudents>,
        payments: Arc<TPayments>,
    ) -> Self {
        Self {
            courses,
            students,
            payments,
        }
    }

    pub async fn handle(&self, command: RecordPayment) -> Result<PaymentRow, ApplicationError> {
        let row = decide_record(command).map_err(ApplicationError::domain)?;
        self.students.get(&row.student_id).await?;
        self.courses.get(&row.course_id).await?;
        self.payments.insert(row.clone()).await?;
        tracing::info!(
            payment_id = %row.id,
            course_id = %row.course_id,
            student_id = %row.student_id,
            amount = row.amount,
            method = ?row.payment_method,
            "payment recorded"
        );
        Ok(row)
    }
}

#[cfg(test)]
mod record_payment_handler_tests {
    use super::*;
    use crate::modules::courses::adapters::outbound::course_repository_in_memory::InMemoryCourses;
    use crate::modules::payments::adapters::outbound::payment_repository_in_memory::InMemoryPayments;
    use crate::modules::students::adapters::outbound::student_repository_in_memory::InMemoryStudents;
    use crate::shared::infrastructure::repository::RepositoryError;
    use crate::tests::fixtures::courses::CourseRowBuilder;
    use crate::tests::fixtures::students::StudentRowBuilder;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn command(course_id: &str, amount: f64) -> RecordPayment {
        RecordPayment {
            payment_id: "p-1".into(),
            student_id: "student-fixed-0001".into(),
            course_id: course_id.into(),
            month: "2025-07".into(),
            amount,
            payment_date: NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
            payment_method: None,
        }
    }

    type Handler = RecordPaymentHandler<InMemoryCourses, InMemoryStudents, InMemoryPayments>;

    async fn handler() -> (Handler, Arc<InMemoryPayments>) {
        let courses = Arc::new(InMemoryCourses::new());
        courses.insert(CourseRowBuilder::new().build()).await.unwrap();
        let students = Arc::new(InMemoryStudents::new());
        students.insert(StudentRowBuilder::new().build()).await.unwrap();
        let payments = Arc::new(InMemoryPayments::new());
        let handler = RecordPaymentHandler::new(courses, students, payments.clone());
        (handler, payments)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_the_payment() {
        let (handler, payments) = handler().await;
        let row = handler
            .handle(command("course-fixed-0001", 250.0))
            .await
            .expect("handle failed");
        assert_eq!(payments.list_since(None).await.unwrap(), vec![row]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_payment_for_an_unknown_course() {
        let (handler, payments) = handler().await;
        let result = handler.handle(command("missing", 250.0)).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Repository(RepositoryError::NotFound(_)))
        ));
        assert!(payments.list_since(None).await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_payment_from_an_unknown_student() {
        let (handler, payments) = handler().await;
        let result = handler
            .handle(RecordPayment {
                student_id: "student-ghost".into(),
                ..command("course-fixed-0001", 250.0)
            })
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Repository(RepositoryError::NotFound(_)))
        ));
        assert!(payments.list_since(None).await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_negative_amount() {
        let (handler, _) = handler().await;
        let result = handler.handle(command("course-fixed-0001", -1.0)).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "domain rejected: amount must be a non-negative number"
        );
    }
}
