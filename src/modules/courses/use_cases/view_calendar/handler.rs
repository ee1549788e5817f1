// View calendar handler.
//
// Purpose
// - Load the courses overlapping a day, week or month window and project their meetings.
//
// Responsibilities
// - Pre-filter courses by run overlap in the repository.
// - Rows that no longer validate are logged and left out of the calendar.
// - Enrolled counts come from the enrollment repository in one lookup.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::adapters::outbound::enrollment_repository::EnrollmentRepository;
use crate::modules::courses::core::calendar::{
    CalendarEvent, daily_events, day_bounds, month_bounds, monthly_events, week_bounds,
    weekly_events,
};
use crate::modules::courses::core::course::Course;
use crate::modules::courses::core::schedule::InvalidRangeError;
use crate::shared::core::errors::ApplicationError;

pub struct ViewCalendarHandler<TCourses, TEnrollments>
where
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
{
    courses: Arc<TCourses>,
    enrollments: Arc<TEnrollments>,
}

impl<TCourses, TEnrollments> ViewCalendarHandler<TCourses, TEnrollments>
where
    TCourses: CourseRepository + 'static,
    TEnrollments: EnrollmentRepository + 'static,
{
    pub fn new(courses: Arc<TCourses>, enrollments: Arc<TEnrollments>) -> Self {
        Self {
            courses,
            enrollments,
        }
    }

    pub async fn daily(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, ApplicationError> {
        let (start, end) = day_bounds(date);
        let (courses, counts) = self.load(start, end).await?;
        project(daily_events(&courses, date, &counts), start, end)
    }

    pub async fn weekly(
        &self,
        week_start: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, ApplicationError> {
        let (start, end) = week_bounds(week_start);
        let (courses, counts) = self.load(start, end).await?;
        project(weekly_events(&courses, week_start, &counts), start, end)
    }

    /// `within` may be any day of the month.
    pub async fn monthly(&self, within: NaiveDate) -> Result<Vec<CalendarEvent>, ApplicationError> {
        let (start, end) = month_bounds(within);
        let (courses, counts) = self.load(start, end).await?;
        project(monthly_events(&courses, within, &counts), start, end)
    }

    async fn load(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(Vec<Course>, HashMap<String, u32>), ApplicationError> {
        let rows = self.courses.list_overlapping(start, end).await?;
        let courses: Vec<Course> = rows
            .into_iter()
            .filter_map(|row| {
                let course_id = row.id.clone();
                match Course::try_from(row) {
                    Ok(course) => Some(course),
                    Err(error) => {
                        tracing::warn!(%course_id, %error, "skipping invalid course");
                        None
                    }
                }
            })
            .collect();

        let ids: Vec<String> = courses.iter().map(|c| c.id.clone()).collect();
        let counts = self.enrollments.counts_by_course(&ids).await?;
        Ok((courses, counts))
    }
}

fn project(
    result: Result<Vec<CalendarEvent>, InvalidRangeError>,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<CalendarEvent>, ApplicationError> {
    let events = result.map_err(ApplicationError::domain)?;
    tracing::debug!(%start, %end, events = events.len(), "calendar projected");
    Ok(events)
}
