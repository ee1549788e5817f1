// Command data type for creating a course.
//
// Purpose
// - Carry the raw course fields for the decider to validate.
// - Be independent of transport details (not tied to HTTP or GraphQL).

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourse {
    pub course_id: String,
    pub name: String,
    pub teacher: String,
    pub start_date: NaiveDate,
    pub time: String,
    pub duration: Option<i64>,
    pub sessions_count: i64,
    pub weekdays: String,
    pub color: Option<String>,
}
