use std::sync::Arc;

use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::student::StudentRow;
use crate::modules::students::use_cases::update_student::command::UpdateStudent;
use crate::modules::students::use_cases::update_student::decide::decide_update;
use crate::shared::core::errors::ApplicationError;

pub struct UpdateStudentHandler<TStudents>
where
    TStudents: StudentRepository + 'static,
{
    students: Arc<TStudents>,
}

impl<TStudents> UpdateStudentHandler<TStudents>
where
    TStudents: StudentRepository + 'static,
{
    pub fn new(students: Arc<TStudents>) -> Self {
        Self { students }
    }

    pub async fn handle(&self, command: UpdateStudent) -> Result<StudentRow, ApplicationError> {
        let current = self.students.get(&command.student_id).await?;
        let row = decide_update(current, command).map_err(ApplicationError::domain)?;
        self.students.update(row.clone()).await?;
        tracing::info!(student_id = %row.id, "student updated");
        Ok(row)
    }
}
