// Income analysis handler.
//
// Responsibilities
// - Resolve the reporting period against a reference date and load its payments.
// - Join payments to the courses they were made for, then aggregate.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::core::course::CourseRow;
use crate::modules::payments::adapters::outbound::payment_repository::PaymentRepository;
use crate::modules::payments::core::income::{
    CoachIncome, CourseIncome, IncomeSummary, Period, coach_income, course_income, summary,
};
use crate::modules::payments::core::payment::PaymentRow;
use crate::shared::core::errors::ApplicationError;

pub struct AnalyseIncomeHandler<TCourses, TPayments>
where
    TCourses: CourseRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    courses: Arc<TCourses>,
    payments: Arc<TPayments>,
}

impl<TCourses, TPayments> AnalyseIncomeHandler<TCourses, TPayments>
where
    TCourses: CourseRepository + 'static,
    TPayments: PaymentRepository + 'static,
{
    pub fn new(courses: Arc<TCourses>, payments: Arc<TPayments>) -> Self {
        Self { courses, payments }
    }

    pub async fn coach_income(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> Result<Vec<CoachIncome>, ApplicationError> {
        let (payments, courses) = self.load(period, today).await?;
        Ok(coach_income(&payments, &courses))
    }

    pub async fn course_income(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> Result<Vec<CourseIncome>, ApplicationError> {
        let (payments, courses) = self.load(period, today).await?;
        Ok(course_income(&payments, &courses))
    }

    pub async fn summary(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> Result<IncomeSummary, ApplicationError> {
        let since = period.start(today);
        let payments = self.payments.list_since(since).await?;
        Ok(summary(&payments))
    }

    async fn load(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> Result<(Vec<PaymentRow>, HashMap<String, CourseRow>), ApplicationError> {
        let since = period.start(today);
        let payments = self.payments.list_since(since).await?;
        let courses = self
            .courses
            .list()
            .await?
            .into_iter()
            .map(|row| (row.id.clone(), row))
            .collect();
        tracing::debug!(?period, ?since, payments = payments.len(), "income loaded");
        Ok((payments, courses))
    }
}
