// Create course handler.
//
// Responsibilities
// - Run the pure decider, then persist the resulting row.
// - Uniqueness of course names is enforced by the repository.

use std::sync::Arc;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::core::course::CourseRow;
use crate::modules::courses::use_cases::create_course::command::CreateCourse;
use crate::modules::courses::use_cases::create_course::decide::decide_create;
use crate::shared::core::errors::ApplicationError;

pub struct CreateCourseHandler<TCourses>
where
    TCourses: CourseRepository + 'static,
{
    courses: Arc<TCourses>,
}

impl<TCourses> CreateCourseHandler<TCourses>
where
    TCourses: CourseRepository + 'static,
{
    pub fn new(courses: Arc<TCourses>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, command: CreateCourse) -> Result<CourseRow, ApplicationError> {
        let course = decide_create(command).map_err(ApplicationError::domain)?;
        let row = CourseRow::from(&course);
        self.courses.insert(row.clone()).await?;
        tracing::info!(
            course_id = %row.id,
            end_date = %row.end_date,
            sessions_per_week = row.sessions_per_week,
            "course created"
        );
        Ok(row)
    }
}
