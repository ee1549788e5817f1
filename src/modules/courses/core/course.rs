// Course aggregate and its stored row.
//
// Purpose
// - `Course` is the validated domain value the calendar engine works on.
// - `CourseRow` is the flat shape kept by repositories and returned by the API.
//
// Responsibilities
// - Validate display fields (name, teacher, time, duration, color).
// - Convert rows back into courses, rejecting rows whose schedule is invalid.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::modules::courses::core::schedule::{Schedule, ScheduleConfigurationError};
use crate::modules::courses::core::weekdays::WeekdaySet;
use crate::shared::core::primitives::{PrimitiveError, format_time, parse_time};

pub const DEFAULT_COLOR: &str = "#3B82F6";
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CourseError {
    #[error(transparent)]
    Schedule(#[from] ScheduleConfigurationError),

    #[error(transparent)]
    Primitive(#[from] PrimitiveError),

    #[error("course name must not be blank")]
    BlankName,

    #[error("teacher must not be blank")]
    BlankTeacher,

    #[error("duration must be a positive number of minutes, got {0}")]
    InvalidDuration(i64),

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub teacher: String,
    pub time: NaiveTime,
    pub duration: u32,
    pub color: String,
    pub schedule: Schedule,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CourseRow {
    pub id: String,
    pub name: String,
    pub teacher: String,
    pub start_date: NaiveDate,
    pub time: String,
    pub duration: i64,
    pub sessions_count: i64,
    pub sessions_per_week: i64,
    pub weekdays: String,
    pub end_date: NaiveDate,
    pub color: String,
}

pub fn validate_name(name: &str) -> Result<String, CourseError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CourseError::BlankName);
    }
    Ok(name.to_string())
}

pub fn validate_teacher(teacher: &str) -> Result<String, CourseError> {
    let teacher = teacher.trim();
    if teacher.is_empty() {
        return Err(CourseError::BlankTeacher);
    }
    Ok(teacher.to_string())
}

pub fn validate_duration(minutes: i64) -> Result<u32, CourseError> {
    u32::try_from(minutes)
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or(CourseError::InvalidDuration(minutes))
}

pub fn validate_color(color: &str) -> Result<String, CourseError> {
    let hex = color.strip_prefix('#').unwrap_or_default();
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CourseError::InvalidColor(color.to_string()));
    }
    Ok(color.to_string())
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            teacher: course.teacher.clone(),
            start_date: course.schedule.start_date(),
            time: format_time(course.time),
            duration: i64::from(course.duration),
            sessions_count: i64::from(course.schedule.sessions_count()),
            sessions_per_week: i64::from(course.schedule.sessions_per_week()),
            weekdays: course.schedule.weekdays().to_string(),
            end_date: course.schedule.end_date(),
            color: course.color.clone(),
        }
    }
}

impl TryFrom<CourseRow> for Course {
    type Error = CourseError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let weekdays: WeekdaySet = row.weekdays.parse()?;
        let schedule = Schedule::new(row.start_date, row.end_date, weekdays, row.sessions_count)?;
        Ok(Self {
            id: row.id,
            name: validate_name(&row.name)?,
            teacher: validate_teacher(&row.teacher)?,
            time: parse_time(&row.time)?,
            duration: validate_duration(row.duration)?,
            color: validate_color(&row.color)?,
            schedule,
        })
    }
}
