// Course meetings and their attendance sheets.
//
// Responsibilities
// - A new meeting gets one attendance row per student enrolled at that moment.
// - Students later added to the course have no row on earlier meetings.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRow {
    pub id: String,
    pub course_id: String,
    pub date: NaiveDate,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub meeting_id: String,
    pub student_id: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceEntry {
    pub student_id: String,
    pub student_name: String,
    pub present: bool,
}

/// A meeting as listed under its course, with names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingRecord {
    pub id: String,
    pub date: NaiveDate,
    pub notes: String,
    pub attendance: Vec<AttendanceEntry>,
}

/// Marks each enrolled student present when listed in `present`, absent otherwise.
/// Ids in `present` that are not enrolled are ignored.
pub fn roll_call(meeting_id: &str, enrolled: &[String], present: &[String]) -> Vec<AttendanceRow> {
    let present: HashSet<&str> = present.iter().map(String::as_str).collect();
    enrolled
        .iter()
        .map(|student_id| AttendanceRow {
            meeting_id: meeting_id.to_string(),
            student_id: student_id.clone(),
            present: present.contains(student_id.as_str()),
        })
        .collect()
}
