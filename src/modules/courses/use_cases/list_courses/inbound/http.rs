use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

pub async fn handle_list(State(state): State<AppState>) -> impl IntoResponse {
    match state.courses.list().await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => error_response(e.into()),
    }
}

pub async fn handle_get(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> impl IntoResponse {
    match state.courses.get(&course_id).await {
        Ok(row) => Json(row).into_response(),
        Err(e) => error_response(e.into()),
    }
}
