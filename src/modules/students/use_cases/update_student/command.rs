// Command data type for editing a student. Absent fields keep their current value.
//
// A present but blank national id clears it.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStudent {
    pub student_id: String,
    pub first_name: Option<String>,
    pub fathers_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub national_id: Option<String>,
    pub as_of: NaiveDate,
}
