use chrono::NaiveDate;

use crate::modules::courses::core::meeting::MeetingRow;

pub fn make_meeting_row(id: &str, course_id: &str, held_on: &str) -> MeetingRow {
    MeetingRow {
        id: id.to_string(),
        course_id: course_id.to_string(),
        date: NaiveDate::parse_from_str(held_on, "%Y-%m-%d").unwrap(),
        notes: String::new(),
    }
}
