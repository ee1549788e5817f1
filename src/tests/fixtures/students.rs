use chrono::NaiveDate;

use crate::modules::students::core::student::StudentRow;

pub struct StudentRowBuilder {
    row: StudentRow,
}

impl Default for StudentRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentRowBuilder {
    pub fn new() -> Self {
        Self {
            row: StudentRow {
                id: "student-fixed-0001".into(),
                first_name: "Noam".into(),
                fathers_name: "Avi".into(),
                phone: "050-0000001".into(),
                date_of_birth: NaiveDate::from_ymd_opt(2015, 5, 14).unwrap(),
                national_id: None,
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.row.id = id.into();
        self
    }

    pub fn first_name(mut self, first_name: &str) -> Self {
        self.row.first_name = first_name.into();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.row.phone = phone.into();
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: &str) -> Self {
        self.row.date_of_birth = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d").unwrap();
        self
    }

    pub fn national_id(mut self, national_id: Option<&str>) -> Self {
        self.row.national_id = national_id.map(str::to_string);
        self
    }

    pub fn build(self) -> StudentRow {
        self.row
    }
}

/// A student whose id and phone are both derived from `id`.
pub fn make_student_row(id: &str, first_name: &str) -> StudentRow {
    StudentRowBuilder::new()
        .id(id)
        .first_name(first_name)
        .phone(&format!("phone-{id}"))
        .build()
}
