// Command data type for editing a coach. Absent fields keep their current value.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCoach {
    pub coach_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}
