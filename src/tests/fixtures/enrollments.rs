use chrono::NaiveDate;

use crate::modules::courses::adapters::outbound::enrollment_repository::EnrollmentRow;

pub fn make_enrollment_row(id: &str, course_id: &str, student_id: &str) -> EnrollmentRow {
    EnrollmentRow {
        id: id.to_string(),
        course_id: course_id.to_string(),
        student_id: student_id.to_string(),
        enrollment_date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
    }
}
