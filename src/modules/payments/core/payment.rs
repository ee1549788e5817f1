// Payment row and its validation rules.
//
// Responsibilities
// - Amounts are finite and non-negative.
// - The billed month is written `YYYY-MM`.
// - Every payment names a student.
// - The method is cash, check or transfer. Anything else is recorded as cash.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("amount must be a non-negative number")]
    InvalidAmount,

    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    #[error("student id must not be blank")]
    BlankStudent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Check,
    Transfer,
}

impl PaymentMethod {
    /// Case and surrounding whitespace are ignored. Unknown or missing methods fall back to cash.
    pub fn normalise(raw: Option<&str>) -> Self {
        match raw.map(|method| method.trim().to_ascii_lowercase()).as_deref() {
            Some("check") => Self::Check,
            Some("transfer") => Self::Transfer,
            _ => Self::Cash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaymentRow {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub month: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
}

pub fn validate_amount(amount: f64) -> Result<f64, PaymentError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(PaymentError::InvalidAmount);
    }
    Ok(amount)
}

pub fn validate_month(month: &str) -> Result<String, PaymentError> {
    let month = month.trim();
    let well_formed = month.len() == 7
        && NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok();
    if !well_formed {
        return Err(PaymentError::InvalidMonth(month.to_string()));
    }
    Ok(month.to_string())
}
