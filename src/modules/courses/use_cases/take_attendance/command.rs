#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceMark {
    pub student_id: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeAttendance {
    pub meeting_id: String,
    pub marks: Vec<AttendanceMark>,
}
