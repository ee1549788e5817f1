use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordPayment {
    pub payment_id: String,
    pub student_id: String,
    pub course_id: String,
    pub month: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_method: Option<String>,
}
