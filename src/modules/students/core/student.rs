// Student record and its validation rules.
//
// Responsibilities
// - First name, father's name and phone are required.
// - A blank national id is stored as absent.
// - Age is computed against a reference date and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StudentError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("date of birth {0} is in the future")]
    BornInFuture(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: String,
    pub first_name: String,
    pub fathers_name: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub national_id: Option<String>,
}

impl StudentRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.fathers_name)
    }

    /// Whole years completed on `today`.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.date_of_birth).unwrap_or(0)
    }
}

/// API shape of a student: the stored row plus the age on the day of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentView {
    #[serde(flatten)]
    pub student: StudentRow,
    pub age: u32,
}

impl StudentView {
    pub fn on(student: StudentRow, today: NaiveDate) -> Self {
        let age = student.age_on(today);
        Self { student, age }
    }
}

pub fn require(field: &'static str, value: &str) -> Result<String, StudentError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StudentError::MissingField(field));
    }
    Ok(value.to_string())
}

pub fn normalise_national_id(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().to_string()).filter(|id| !id.is_empty())
}

pub fn validate_birth_date(
    date_of_birth: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, StudentError> {
    if date_of_birth > today {
        return Err(StudentError::BornInFuture(date_of_birth));
    }
    Ok(date_of_birth)
}
