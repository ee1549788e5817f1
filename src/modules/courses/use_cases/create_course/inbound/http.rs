use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::courses::use_cases::create_course::command::CreateCourse;
use crate::shared::core::primitives::parse_date;
use crate::shared::infrastructure::http::{error_body, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateCourseBody {
    pub name: String,
    pub teacher: String,
    pub start_date: String,
    pub time: String,
    pub duration: Option<i64>,
    pub sessions_count: i64,
    #[serde(default)]
    pub weekdays: String,
    pub color: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateCourseBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let start_date = match parse_date(&body.start_date) {
        Ok(date) => date,
        Err(e) => return error_body(StatusCode::BAD_REQUEST, e),
    };

    let command = CreateCourse {
        course_id: Uuid::now_v7().to_string(),
        name: body.name,
        teacher: body.teacher,
        start_date,
        time: body.time,
        duration: body.duration,
        sessions_count: body.sessions_count,
        weekdays: body.weekdays,
        color: body.color,
    };

    match state.create_course.handle(command).await {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e) => error_response(e),
    }
}
