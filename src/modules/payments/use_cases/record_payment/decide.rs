use crate::modules::payments::core::payment::{
    PaymentError, PaymentMethod, PaymentRow, validate_amount, validate_month,
};
use crate::modules::payments::use_cases::record_payment::command::RecordPayment;

pub fn decide_record(command: RecordPayment) -> Result<PaymentRow, PaymentError> {
    let student_id = command.student_id.trim();
    if student_id.is_empty() {
        return Err(PaymentError::BlankStudent);
    }
    Ok(PaymentRow {
        id: command.payment_id,
        student_id: student_id.to_string(),
        course_id: command.course_id,
        month: validate_month(&command.month)?,
        amount: validate_amount(command.amount)?,
        payment_date: command.payment_date,
        payment_method: PaymentMethod::normalise(command.payment_method.as_deref()),
    })
}
