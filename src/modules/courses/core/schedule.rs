// Recurring schedule engine.
//
// Purpose
// - Derive the weekly shape of a course from its weekday pattern and session count.
// - Enumerate the dates a course meets on inside any inclusive date window.
// - Count sessions completed strictly before a date and the sessions remaining.
//
// Boundaries
// - Pure functions over immutable values. No input or output, no shared state.
// - Callers parse dates and weekday strings before reaching this module.

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::modules::courses::core::weekdays::{WeekdaySet, sunday_based_weekday};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleConfigurationError {
    #[error("at least one weekday must be selected")]
    NoWeekdays,

    #[error("invalid weekday '{0}', expected an index from 0 (Sunday) to 6 (Saturday)")]
    InvalidWeekday(String),

    #[error("sessions count must be positive, got {0}")]
    NonPositiveSessions(i64),

    #[error("sessions count {0} is too large")]
    TooManySessions(i64),

    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("end date is out of the supported calendar range")]
    EndDateOutOfRange,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("range end {end} precedes range start {start}")]
pub struct InvalidRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Returns `(sessions_per_week, total_weeks)` for a weekday pattern and a
/// contracted number of sessions. `total_weeks` is the ceiling of
/// `sessions_count / sessions_per_week`.
pub fn sessions_per_week_and_weeks(
    weekdays: &WeekdaySet,
    sessions_count: i64,
) -> Result<(u32, u32), ScheduleConfigurationError> {
    if weekdays.is_empty() {
        return Err(ScheduleConfigurationError::NoWeekdays);
    }
    let sessions_count = validate_sessions_count(sessions_count)?;
    let sessions_per_week = weekdays.len();
    let total_weeks = sessions_count.div_ceil(sessions_per_week);
    Ok((sessions_per_week, total_weeks))
}

fn validate_sessions_count(sessions_count: i64) -> Result<u32, ScheduleConfigurationError> {
    if sessions_count <= 0 {
        return Err(ScheduleConfigurationError::NonPositiveSessions(sessions_count));
    }
    u32::try_from(sessions_count)
        .map_err(|_| ScheduleConfigurationError::TooManySessions(sessions_count))
}

/// A validated recurrence definition.
///
/// Construction is the only place configuration is checked: once a
/// `Schedule` exists, its weekday set is non-empty, its session count is
/// positive and `start_date <= end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    start_date: NaiveDate,
    end_date: NaiveDate,
    weekdays: WeekdaySet,
    sessions_count: u32,
}

impl Schedule {
    /// Builds a schedule for a new or edited course, deriving
    /// `end_date = start_date + total_weeks weeks`.
    pub fn derive(
        start_date: NaiveDate,
        weekdays: WeekdaySet,
        sessions_count: i64,
    ) -> Result<Self, ScheduleConfigurationError> {
        let (_, total_weeks) = sessions_per_week_and_weeks(&weekdays, sessions_count)?;
        let end_date = start_date
            .checked_add_days(Days::new(u64::from(total_weeks) * 7))
            .ok_or(ScheduleConfigurationError::EndDateOutOfRange)?;
        Self::new(start_date, end_date, weekdays, sessions_count)
    }

    /// Rebuilds a schedule from stored values without re-deriving `end_date`.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        weekdays: WeekdaySet,
        sessions_count: i64,
    ) -> Result<Self, ScheduleConfigurationError> {
        if weekdays.is_empty() {
            return Err(ScheduleConfigurationError::NoWeekdays);
        }
        let sessions_count = validate_sessions_count(sessions_count)?;
        if end_date < start_date {
            return Err(ScheduleConfigurationError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
            weekdays,
            sessions_count,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn weekdays(&self) -> WeekdaySet {
        self.weekdays
    }

    pub fn sessions_count(&self) -> u32 {
        self.sessions_count
    }

    pub fn sessions_per_week(&self) -> u32 {
        self.weekdays.len()
    }

    /// True when `date` lies within the course's run and falls on one of its weekdays.
    pub fn meets_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date && self.weekdays.contains_date(date)
    }
}

/// Occurrence dates of one schedule inside a window, in ascending order.
///
/// The iterator is finite and cheap to clone; cloning it before consuming
/// restarts the enumeration.
#[derive(Debug, Clone)]
pub struct Occurrences {
    cursor: Option<NaiveDate>,
    last: NaiveDate,
    weekdays: WeekdaySet,
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.cursor {
            if current > self.last {
                self.cursor = None;
                break;
            }
            self.cursor = current.succ_opt();
            if self.weekdays.contains_date(current) {
                return Some(current);
            }
        }
        None
    }
}

/// Enumerates the dates in `[range_start, range_end]` on which the schedule meets.
pub fn occurrences_in_range(
    schedule: &Schedule,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Result<Occurrences, InvalidRangeError> {
    if range_end < range_start {
        return Err(InvalidRangeError {
            start: range_start,
            end: range_end,
        });
    }
    let first = schedule.start_date.max(range_start);
    let last = schedule.end_date.min(range_end);
    Ok(Occurrences {
        cursor: (first <= last).then_some(first),
        last,
        weekdays: schedule.weekdays,
    })
}

/// Number of meetings on weekday-matching dates in `[start_date, as_of_date)`.
///
/// Counted in closed form: whole weeks contribute one meeting per weekday,
/// the remaining partial week is checked day by day.
pub fn classes_completed_before(schedule: &Schedule, as_of_date: NaiveDate) -> u64 {
    let elapsed_days = as_of_date
        .signed_duration_since(schedule.start_date)
        .num_days();
    if elapsed_days <= 0 {
        return 0;
    }
    let full_weeks = (elapsed_days / 7) as u64;
    let partial_days = elapsed_days % 7;
    let first_weekday = i64::from(sunday_based_weekday(schedule.start_date));
    let partial_hits = (0..partial_days)
        .filter(|offset| {
            schedule
                .weekdays
                .contains(((first_weekday + offset) % 7) as u8)
        })
        .count() as u64;
    full_weeks * u64::from(schedule.sessions_per_week()) + partial_hits
}

/// Sessions still to be held as of `as_of_date`, clamped at zero.
pub fn classes_remaining_as_of(schedule: &Schedule, as_of_date: NaiveDate) -> u32 {
    let completed = classes_completed_before(schedule, as_of_date);
    u64::from(schedule.sessions_count).saturating_sub(completed) as u32
}
