use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::students::core::student::StudentView;
use crate::modules::students::use_cases::update_student::command::UpdateStudent;
use crate::shared::core::primitives::{parse_date, today};
use crate::shared::infrastructure::http::{error_body, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateStudentBody {
    pub first_name: Option<String>,
    pub fathers_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub national_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    body: Result<Json<UpdateStudentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let date_of_birth = match body.date_of_birth.as_deref().map(parse_date).transpose() {
        Ok(date) => date,
        Err(e) => return error_body(StatusCode::BAD_REQUEST, e),
    };
    let today = today();

    let command = UpdateStudent {
        student_id,
        first_name: body.first_name,
        fathers_name: body.fathers_name,
        phone: body.phone,
        date_of_birth,
        national_id: body.national_id,
        as_of: today,
    };

    match state.update_student.handle(command).await {
        Ok(row) => Json(StudentView::on(row, today)).into_response(),
        Err(e) => error_response(e),
    }
}
