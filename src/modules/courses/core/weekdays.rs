// Weekday sets in the Sunday-based convention (Sunday=0 .. Saturday=6).
//
// Purpose
// - Hold the days of the week a course meets on.
// - Own the single conversion from chrono's weekday into the Sunday-based index.
//
// Boundaries
// - No input or output. Parsing errors are reported as ScheduleConfigurationError.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::modules::courses::core::schedule::ScheduleConfigurationError;

/// Sunday-based weekday index of `date`: Sunday=0, Monday=1, .., Saturday=6.
///
/// Every membership test in the engine goes through this function, so the
/// occurrence walk and the completed-session count can never disagree.
pub fn sunday_based_weekday(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// A deduplicated set of Sunday-based weekday indices, stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn from_indices<I>(indices: I) -> Result<Self, ScheduleConfigurationError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut set = Self::empty();
        for index in indices {
            if index > 6 {
                return Err(ScheduleConfigurationError::InvalidWeekday(index.to_string()));
            }
            set.0 |= 1 << index;
        }
        Ok(set)
    }

    pub fn contains(&self, weekday: u8) -> bool {
        weekday < 7 && self.0 & (1 << weekday) != 0
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(sunday_based_weekday(date))
    }

    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Ascending weekday indices.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..7).filter(|day| self.contains(*day))
    }
}

impl FromStr for WeekdaySet {
    type Err = ScheduleConfigurationError;

    /// Parses the comma separated form used by the API, e.g. `"0,2,5"`.
    /// Blank segments are ignored, so `""` parses to the empty set.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let indices = raw
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment
                    .parse::<u8>()
                    .map_err(|_| ScheduleConfigurationError::InvalidWeekday(segment.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_indices(indices)
    }
}

impl TryFrom<String> for WeekdaySet {
    type Error = ScheduleConfigurationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<WeekdaySet> for String {
    fn from(set: WeekdaySet) -> Self {
        set.to_string()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|day| day.to_string())
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}
