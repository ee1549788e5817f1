// Income analytics over recorded payments.
//
// Purpose
// - Resolve reporting periods (month, quarter, year, all) against a reference date.
// - Aggregate payments per coach, per course and overall.
//
// Boundaries
// - Pure. Callers filter payments by period start and pass the courses they reference.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::modules::courses::core::course::CourseRow;
use crate::modules::payments::core::payment::PaymentRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    Month,
    Quarter,
    Year,
    #[default]
    All,
}

impl FromStr for Period {
    type Err = std::convert::Infallible;

    /// Unknown values read as `All`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw.trim().to_ascii_lowercase().as_str() {
            "month" => Period::Month,
            "quarter" => Period::Quarter,
            "year" => Period::Year,
            _ => Period::All,
        })
    }
}

impl Period {
    /// First day counted by the period, or `None` when unbounded.
    pub fn start(self, today: NaiveDate) -> Option<NaiveDate> {
        let month = match self {
            Period::Month => today.month(),
            Period::Quarter => (today.month0() / 3) * 3 + 1,
            Period::Year => 1,
            Period::All => return None,
        };
        NaiveDate::from_ymd_opt(today.year(), month, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachIncome {
    pub teacher: String,
    pub total_income: f64,
    pub payment_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseIncome {
    pub course_name: String,
    pub total_income: f64,
    pub payment_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeSummary {
    pub total_revenue: f64,
    pub total_payments: u32,
    pub average_payment: f64,
}

fn group_by<F>(
    payments: &[PaymentRow],
    courses: &HashMap<String, CourseRow>,
    key: F,
) -> BTreeMap<String, (f64, u32)>
where
    F: Fn(&CourseRow) -> &str,
{
    let mut groups: BTreeMap<String, (f64, u32)> = BTreeMap::new();
    for payment in payments {
        // Payments for unknown courses drop out, like an inner join.
        let Some(course) = courses.get(&payment.course_id) else {
            continue;
        };
        let entry = groups.entry(key(course).to_string()).or_default();
        entry.0 += payment.amount;
        entry.1 += 1;
    }
    groups
}

pub fn coach_income(
    payments: &[PaymentRow],
    courses: &HashMap<String, CourseRow>,
) -> Vec<CoachIncome> {
    group_by(payments, courses, |course| &course.teacher)
        .into_iter()
        .map(|(teacher, (total_income, payment_count))| CoachIncome {
            teacher,
            total_income,
            payment_count,
        })
        .collect()
}

pub fn course_income(
    payments: &[PaymentRow],
    courses: &HashMap<String, CourseRow>,
) -> Vec<CourseIncome> {
    group_by(payments, courses, |course| &course.name)
        .into_iter()
        .map(|(course_name, (total_income, payment_count))| CourseIncome {
            course_name,
            total_income,
            payment_count,
        })
        .collect()
}

pub fn summary(payments: &[PaymentRow]) -> IncomeSummary {
    let total_revenue: f64 = payments.iter().map(|p| p.amount).sum();
    let total_payments = payments.len() as u32;
    let average_payment = if total_payments == 0 {
        0.0
    } else {
        total_revenue / f64::from(total_payments)
    };
    IncomeSummary {
        total_revenue,
        total_payments,
        average_payment,
    }
}
