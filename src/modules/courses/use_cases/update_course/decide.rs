// Pure decision function for course edits.
//
// Responsibilities
// - Merge the edit onto the current course and validate the result.
// - Re-derive sessions per week and the end date from the (possibly new)
//   weekday pattern and session count, keeping the existing start date.

use crate::modules::courses::core::course::{
    Course, CourseError, CourseRow, validate_color, validate_duration, validate_name,
    validate_teacher,
};
use crate::modules::courses::core::schedule::Schedule;
use crate::modules::courses::core::weekdays::WeekdaySet;
use crate::modules::courses::use_cases::update_course::command::UpdateCourse;
use crate::shared::core::primitives::parse_time;

/// Merges the edit onto the stored row, then validates the merged values.
/// A stored row that no longer validates can be repaired by editing its broken fields.
pub fn decide_update(current: CourseRow, command: UpdateCourse) -> Result<Course, CourseError> {
    let weekdays: WeekdaySet = command
        .weekdays
        .unwrap_or(current.weekdays)
        .parse()?;
    let sessions_count = command.sessions_count.unwrap_or(current.sessions_count);
    let schedule = Schedule::derive(current.start_date, weekdays, sessions_count)?;

    Ok(Course {
        id: current.id,
        name: validate_name(&command.name.unwrap_or(current.name))?,
        teacher: validate_teacher(&command.teacher.unwrap_or(current.teacher))?,
        time: parse_time(&command.time.unwrap_or(current.time))?,
        duration: validate_duration(command.duration.unwrap_or(current.duration))?,
        color: validate_color(&command.color.unwrap_or(current.color))?,
        schedule,
    })
}
