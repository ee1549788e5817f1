use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::students::core::student::StudentView;
use crate::modules::students::use_cases::register_student::command::RegisterStudent;
use crate::shared::core::primitives::{parse_date, today};
use crate::shared::infrastructure::http::{error_body, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterStudentBody {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub fathers_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date_of_birth: String,
    pub national_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterStudentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let date_of_birth = match parse_date(&body.date_of_birth) {
        Ok(date) => date,
        Err(e) => return error_body(StatusCode::BAD_REQUEST, e),
    };
    let today = today();

    let command = RegisterStudent {
        student_id: Uuid::now_v7().to_string(),
        first_name: body.first_name,
        fathers_name: body.fathers_name,
        phone: body.phone,
        date_of_birth,
        national_id: body.national_id,
        as_of: today,
    };

    match state.register_student.handle(command).await {
        Ok(row) => (StatusCode::CREATED, Json(StudentView::on(row, today))).into_response(),
        Err(e) => error_response(e),
    }
}
