use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollStudent {
    pub enrollment_id: String,
    pub course_id: String,
    pub student_id: String,
    pub enrollment_date: NaiveDate,
}
