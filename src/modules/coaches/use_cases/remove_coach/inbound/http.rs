// Coaches are referenced by name only, so removing one leaves courses untouched.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::coaches::adapters::outbound::coach_repository::CoachRepository;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(coach_id): Path<String>,
) -> impl IntoResponse {
    match state.coaches.delete(&coach_id).await {
        Ok(()) => {
            tracing::info!(%coach_id, "coach removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(e.into()),
    }
}
