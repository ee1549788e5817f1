use crate::modules::students::core::student::{
    StudentError, StudentRow, normalise_national_id, require, validate_birth_date,
};
use crate::modules::students::use_cases::register_student::command::RegisterStudent;

pub fn decide_register(command: RegisterStudent) -> Result<StudentRow, StudentError> {
    Ok(StudentRow {
        id: command.student_id,
        first_name: require("first_name", &command.first_name)?,
        fathers_name: require("fathers_name", &command.fathers_name)?,
        phone: require("phone", &command.phone)?,
        date_of_birth: validate_birth_date(command.date_of_birth, command.as_of)?,
        national_id: normalise_national_id(command.national_id),
    })
}

#[cfg(test)]
mod register_student_decide_tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn command() -> RegisterStudent {
        RegisterStudent {
            student_id: "student-1".into(),
            first_name: " Noam ".into(),
            fathers_name: "Avi".into(),
            phone: "050-0000001".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2015, 5, 14).unwrap(),
            national_id: Some("".into()),
            as_of: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        }
    }

    fn born_in_2026() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[rstest]
    fn it_should_build_the_student_row() {
        let row = decide_register(command()).unwrap();
        assert_eq!(row.first_name, "Noam");
        assert_eq!(row.national_id, None);
    }

    #[rstest]
    #[case(
        RegisterStudent { fathers_name: " ".into(), ..command() },
        StudentError::MissingField("fathers_name")
    )]
    #[case(
        RegisterStudent { date_of_birth: born_in_2026(), ..command() },
        StudentError::BornInFuture(born_in_2026())
    )]
    fn it_should_reject_invalid_students(
        #[case] command: RegisterStudent,
        #[case] expected: StudentError,
    ) {
        assert_eq!(decide_register(command), Err(expected));
    }
}
