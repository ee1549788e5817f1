#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCoach {
    pub coach_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
