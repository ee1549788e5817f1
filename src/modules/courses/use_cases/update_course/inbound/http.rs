use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::courses::use_cases::update_course::command::UpdateCourse;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct UpdateCourseBody {
    pub name: Option<String>,
    pub teacher: Option<String>,
    pub time: Option<String>,
    pub duration: Option<i64>,
    pub color: Option<String>,
    pub sessions_count: Option<i64>,
    pub weekdays: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    body: Result<Json<UpdateCourseBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateCourse {
        course_id,
        name: body.name,
        teacher: body.teacher,
        time: body.time,
        duration: body.duration,
        color: body.color,
        sessions_count: body.sessions_count,
        weekdays: body.weekdays,
    };

    match state.update_course.handle(command).await {
        Ok(row) => Json(row).into_response(),
        Err(e) => error_response(e),
    }
}
