use crate::modules::coaches::core::coach::CoachRow;

pub fn make_coach_row(id: &str, first_name: &str, last_name: &str, phone: &str) -> CoachRow {
    CoachRow {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: phone.to_string(),
    }
}
