// Command data type for editing a course. Absent fields keep their current value.
//
// The start date is fixed once a course exists; the end date is always re-derived.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCourse {
    pub course_id: String,
    pub name: Option<String>,
    pub teacher: Option<String>,
    pub time: Option<String>,
    pub duration: Option<i64>,
    pub color: Option<String>,
    pub sessions_count: Option<i64>,
    pub weekdays: Option<String>,
}
