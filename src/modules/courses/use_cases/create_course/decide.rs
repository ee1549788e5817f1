// Pure decision function for course creation.
//
// Responsibilities
// - Validate every field and derive the schedule (sessions per week, end date).
// - Apply defaults: 60 minute meetings, blue color.
// - Never perform input or output.

use crate::modules::courses::core::course::{
    Course, CourseError, DEFAULT_COLOR, DEFAULT_DURATION_MINUTES, validate_color,
    validate_duration, validate_name, validate_teacher,
};
use crate::modules::courses::core::schedule::Schedule;
use crate::modules::courses::core::weekdays::WeekdaySet;
use crate::modules::courses::use_cases::create_course::command::CreateCourse;
use crate::shared::core::primitives::parse_time;

pub fn decide_create(command: CreateCourse) -> Result<Course, CourseError> {
    let weekdays: WeekdaySet = command.weekdays.parse()?;
    let schedule = Schedule::derive(command.start_date, weekdays, command.sessions_count)?;
    Ok(Course {
        id: command.course_id,
        name: validate_name(&command.name)?,
        teacher: validate_teacher(&command.teacher)?,
        time: parse_time(&command.time)?,
        duration: validate_duration(command.duration.unwrap_or(DEFAULT_DURATION_MINUTES))?,
        color: validate_color(command.color.as_deref().unwrap_or(DEFAULT_COLOR))?,
        schedule,
    })
}

#[cfg(test)]
mod create_course_decide_tests {
    use super::*;
    use crate::modules::courses::core::schedule::ScheduleConfigurationError;
    use crate::tests::fixtures::courses::CreateCourseBuilder;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    fn it_should_derive_the_schedule() {
        let course = decide_create(CreateCourseBuilder::new().build()).unwrap();
        assert_eq!(course.schedule.sessions_per_week(), 2);
        assert_eq!(
            course.schedule.end_date(),
            NaiveDate::from_ymd_opt(2025, 7, 29).unwrap()
        );
    }

    #[rstest]
    #[case("0,2", 8, "2025-07-29")]
    #[case("5", 6, "2025-08-12")]
    #[case("0,1,2", 10, "2025-07-29")]
    #[case("2,2,0", 8, "2025-07-29")]
    fn it_should_set_the_end_date_to_whole_weeks_after_the_start(
        #[case] weekdays: &str,
        #[case] sessions_count: i64,
        #[case] end_date: &str,
    ) {
        let command = CreateCourseBuilder::new()
            .weekdays(weekdays)
            .sessions_count(sessions_count)
            .build();
        let course = decide_create(command).unwrap();
        assert_eq!(course.schedule.end_date().to_string(), end_date);
    }

    #[rstest]
    fn it_should_apply_defaults() {
        let command = CreateCourseBuilder::new().duration(None).color(None).build();
        let course = decide_create(command).unwrap();
        assert_eq!(course.duration, 60);
        assert_eq!(course.color, "#3B82F6");
    }

    #[rstest]
    fn it_should_reject_a_course_without_weekdays() {
        let command = CreateCourseBuilder::new().weekdays("").build();
        assert_eq!(
            decide_create(command),
            Err(CourseError::Schedule(ScheduleConfigurationError::NoWeekdays))
        );
    }

    #[rstest]
    fn it_should_reject_a_non_positive_sessions_count() {
        let command = CreateCourseBuilder::new().sessions_count(0).build();
        assert_eq!(
            decide_create(command),
            Err(CourseError::Schedule(
                ScheduleConfigurationError::NonPositiveSessions(0)
            ))
        );
    }

    #[rstest]
    #[case(CreateCourseBuilder::new().name("  "))]
    #[case(CreateCourseBuilder::new().time("25:61"))]
    #[case(CreateCourseBuilder::new().duration(Some(0)))]
    #[case(CreateCourseBuilder::new().color(Some("blue")))]
    #[case(CreateCourseBuilder::new().weekdays("0,9"))]
    fn it_should_reject_invalid_fields(#[case] builder: CreateCourseBuilder) {
        assert!(decide_create(builder.build()).is_err());
    }
}
