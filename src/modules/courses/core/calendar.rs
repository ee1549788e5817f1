// Calendar event projections over a set of courses.
//
// Purpose
// - Turn course occurrences inside a day, week or month window into display events.
//
// Responsibilities
// - One range-based enumeration; the daily, weekly and monthly views only build windows.
// - Attach the enrolled count from a caller supplied lookup and the sessions remaining.
// - Sort by (date, time). Projections are recomputed on every query and never stored.

use std::collections::HashMap;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::modules::courses::core::course::Course;
use crate::modules::courses::core::schedule::{
    InvalidRangeError, classes_remaining_as_of, occurrences_in_range,
};
use crate::shared::core::primitives::hh_mm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub duration: u32,
    pub teacher: String,
    pub color: String,
    pub enrolled_count: u32,
    pub classes_remaining: u32,
}

/// Enrollment count lookup keyed by course id.
pub trait EnrollmentCounts {
    fn enrolled_count(&self, course_id: &str) -> u32;
}

impl EnrollmentCounts for HashMap<String, u32> {
    fn enrolled_count(&self, course_id: &str) -> u32 {
        self.get(course_id).copied().unwrap_or(0)
    }
}

fn project(course: &Course, date: NaiveDate, counts: &impl EnrollmentCounts) -> CalendarEvent {
    CalendarEvent {
        id: course.id.clone(),
        title: course.name.clone(),
        date,
        time: course.time,
        duration: course.duration,
        teacher: course.teacher.clone(),
        color: course.color.clone(),
        enrolled_count: counts.enrolled_count(&course.id),
        classes_remaining: classes_remaining_as_of(&course.schedule, date),
    }
}

/// Projects every occurrence of every course inside `[range_start, range_end]`.
pub fn events_in_range(
    courses: &[Course],
    range_start: NaiveDate,
    range_end: NaiveDate,
    counts: &impl EnrollmentCounts,
) -> Result<Vec<CalendarEvent>, InvalidRangeError> {
    let mut events = Vec::new();
    for course in courses {
        for date in occurrences_in_range(&course.schedule, range_start, range_end)? {
            events.push(project(course, date, counts));
        }
    }
    events.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
    Ok(events)
}

pub fn daily_events(
    courses: &[Course],
    date: NaiveDate,
    counts: &impl EnrollmentCounts,
) -> Result<Vec<CalendarEvent>, InvalidRangeError> {
    let (start, end) = day_bounds(date);
    events_in_range(courses, start, end, counts)
}

pub fn weekly_events(
    courses: &[Course],
    week_start: NaiveDate,
    counts: &impl EnrollmentCounts,
) -> Result<Vec<CalendarEvent>, InvalidRangeError> {
    let (start, end) = week_bounds(week_start);
    events_in_range(courses, start, end, counts)
}

pub fn monthly_events(
    courses: &[Course],
    month_start: NaiveDate,
    counts: &impl EnrollmentCounts,
) -> Result<Vec<CalendarEvent>, InvalidRangeError> {
    let (start, end) = month_bounds(month_start);
    events_in_range(courses, start, end, counts)
}

pub fn day_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    (date, date)
}

/// Seven days starting at `week_start`, whatever weekday that is.
pub fn week_bounds(week_start: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = week_start
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX);
    (week_start, end)
}

/// First and last day of the calendar month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date - Days::new(u64::from(date.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}
