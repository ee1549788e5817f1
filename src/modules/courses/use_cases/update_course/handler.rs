use std::sync::Arc;

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::modules::courses::core::course::CourseRow;
use crate::modules::courses::use_cases::update_course::command::UpdateCourse;
use crate::modules::courses::use_cases::update_course::decide::decide_update;
use crate::shared::core::errors::ApplicationError;

pub struct UpdateCourseHandler<TCourses>
where
    TCourses: CourseRepository + 'static,
{
    courses: Arc<TCourses>,
}

impl<TCourses> UpdateCourseHandler<TCourses>
where
    TCourses: CourseRepository + 'static,
{
    pub fn new(courses: Arc<TCourses>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, command: UpdateCourse) -> Result<CourseRow, ApplicationError> {
        let stored = self.courses.get(&command.course_id).await?;
        let course = decide_update(stored, command).map_err(ApplicationError::domain)?;
        let row = CourseRow::from(&course);
        self.courses.update(row.clone()).await?;
        tracing::info!(course_id = %row.id, end_date = %row.end_date, "course updated");
        Ok(row)
    }
}
