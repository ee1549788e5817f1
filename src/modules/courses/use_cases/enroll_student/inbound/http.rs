use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::courses::adapters::outbound::enrollment_repository::EnrollmentRepository;
use crate::modules::courses::use_cases::enroll_student::command::EnrollStudent;
use crate::shared::core::primitives::today;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EnrollStudentBody {
    pub course_id: String,
    pub student_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EnrollStudentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = EnrollStudent {
        enrollment_id: Uuid::now_v7().to_string(),
        course_id: body.course_id,
        student_id: body.student_id,
        enrollment_date: today(),
    };

    match state.enroll_student.handle(command).await {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_list(State(state): State<AppState>) -> impl IntoResponse {
    match state.enrollments.list().await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => error_response(e.into()),
    }
}

pub async fn handle_delete(
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
) -> impl IntoResponse {
    match state.enrollments.delete(&enrollment_id).await {
        Ok(()) => {
            tracing::info!(%enrollment_id, "enrollment removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(e.into()),
    }
}
