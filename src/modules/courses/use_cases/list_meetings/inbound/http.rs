use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> impl IntoResponse {
    match state.list_meetings.list(&course_id).await {
        Ok(records) => Json(records).into_response(),
        Err(e) => error_response(e),
    }
}
