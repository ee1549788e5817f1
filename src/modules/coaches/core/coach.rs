// Coach record. First name, last name and phone are all required.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoachError {
    #[error("first_name, last_name and phone are required")]
    MissingFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl CoachRow {
    /// Courses name their coach by this string.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn validate(self) -> Result<Self, CoachError> {
        let [first_name, last_name, phone] =
            [self.first_name, self.last_name, self.phone].map(|field| field.trim().to_string());
        if first_name.is_empty() || last_name.is_empty() || phone.is_empty() {
            return Err(CoachError::MissingFields);
        }
        Ok(Self {
            id: self.id,
            first_name,
            last_name,
            phone,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachView {
    #[serde(flatten)]
    pub coach: CoachRow,
    pub full_name: String,
}

impl From<CoachRow> for CoachView {
    fn from(coach: CoachRow) -> Self {
        let full_name = coach.full_name();
        Self { coach, full_name }
    }
}
