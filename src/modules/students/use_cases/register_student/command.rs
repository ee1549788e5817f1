use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterStudent {
    pub student_id: String,
    pub first_name: String,
    pub fathers_name: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub national_id: Option<String>,
    /// Reference date for the birth date check.
    pub as_of: NaiveDate,
}
