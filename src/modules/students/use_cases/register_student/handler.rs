use std::sync::Arc;

use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::student::StudentRow;
use crate::modules::students::use_cases::register_student::command::RegisterStudent;
use crate::modules::students::use_cases::register_student::decide::decide_register;
use crate::shared::core::errors::ApplicationError;

pub struct RegisterStudentHandler<TStudents>
where
    TStudents: StudentRepository + 'static,
{
    students: Arc<TStudents>,
}

impl<TStudents> RegisterStudentHandler<TStudents>
where
    TStudents: StudentRepository + 'static,
{
    pub fn new(students: Arc<TStudents>) -> Self {
        Self { students }
    }

    pub async fn handle(&self, command: RegisterStudent) -> Result<StudentRow, ApplicationError> {
        let row = decide_register(command).map_err(ApplicationError::domain)?;
        self.students.insert(row.clone()).await?;
        tracing::info!(student_id = %row.id, "student registered");
        Ok(row)
    }
}
