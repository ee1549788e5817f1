use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMeeting {
    pub meeting_id: String,
    pub course_id: String,
    pub date: NaiveDate,
    pub notes: String,
    /// Students marked present. Everyone else enrolled is recorded absent.
    pub present: Vec<String>,
}
