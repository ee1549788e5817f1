use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> impl IntoResponse {
    match state.delete_course.handle(&course_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
