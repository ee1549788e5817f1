use crate::modules::students::core::student::{
    StudentError, StudentRow, normalise_national_id, require, validate_birth_date,
};
use crate::modules::students::use_cases::update_student::command::UpdateStudent;

pub fn decide_update(
    current: StudentRow,
    command: UpdateStudent,
) -> Result<StudentRow, StudentError> {
    let first_name = command.first_name.unwrap_or(current.first_name);
    let fathers_name = command.fathers_name.unwrap_or(current.fathers_name);
    let phone = command.phone.unwrap_or(current.phone);
    let date_of_birth = command.date_of_birth.unwrap_or(current.date_of_birth);
    let national_id = match command.national_id {
        Some(raw) => normalise_national_id(Some(raw)),
        None => current.national_id,
    };
    Ok(StudentRow {
        id: current.id,
        first_name: require("first_name", &first_name)?,
        fathers_name: require("fathers_name", &fathers_name)?,
        phone: require("phone", &phone)?,
        date_of_birth: validate_birth_date(date_of_birth, command.as_of)?,
        national_id,
    })
}

#[cfg(test)]
mod update_student_decide_tests {
    use super::*;
    use crate::tests::fixtures::students::StudentRowBuilder;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn command() -> UpdateStudent {
        UpdateStudent {
            student_id: "student-fixed-0001".into(),
            first_name: None,
            fathers_name: None,
            phone: None,
            date_of_birth: None,
            national_id: None,
            as_of: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        }
    }

    #[rstest]
    fn it_should_keep_absent_fields() {
        let current = StudentRowBuilder::new().national_id(Some("123456782")).build();
        let updated = decide_update(
            current.clone(),
            UpdateStudent {
                phone: Some("050-9".into()),
                ..command()
            },
        )
        .unwrap();
        assert_eq!(
            updated,
            StudentRow {
                phone: "050-9".into(),
                ..current
            }
        );
    }

    #[rstest]
    #[case(Some(" "), None)]
    #[case(Some("987654321"), Some("987654321"))]
    #[case(None, Some("123456782"))]
    fn it_should_set_or_clear_the_national_id(
        #[case] national_id: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let current = StudentRowBuilder::new().national_id(Some("123456782")).build();
        let updated = decide_update(
            current,
            UpdateStudent {
                national_id: national_id.map(str::to_string),
                ..command()
            },
        )
        .unwrap();
        assert_eq!(updated.national_id.as_deref(), expected);
    }

    #[rstest]
    fn it_should_reject_blanking_the_first_name() {
        let result = decide_update(
            StudentRowBuilder::new().build(),
            UpdateStudent {
                first_name: Some("".into()),
                ..command()
            },
        );
        assert_eq!(result, Err(StudentError::MissingField("first_name")));
    }
}
