use chrono::NaiveDate;

use crate::modules::payments::core::payment::{PaymentMethod, PaymentRow};

pub fn make_payment_row(id: &str, course_id: &str, amount: f64, paid_on: &str) -> PaymentRow {
    let payment_date = NaiveDate::parse_from_str(paid_on, "%Y-%m-%d").unwrap();
    PaymentRow {
        id: id.to_string(),
        student_id: "student-fixed-0001".to_string(),
        course_id: course_id.to_string(),
        month: payment_date.format("%Y-%m").to_string(),
        amount,
        payment_date,
        payment_method: PaymentMethod::Cash,
    }
}
