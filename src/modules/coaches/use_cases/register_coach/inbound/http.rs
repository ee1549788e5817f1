use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::coaches::core::coach::CoachView;
use crate::modules::coaches::use_cases::register_coach::command::RegisterCoach;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

// Missing fields are reported by the decider as a 400, not as a body rejection.
#[derive(Deserialize)]
pub struct RegisterCoachBody {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterCoachBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterCoach {
        coach_id: Uuid::now_v7().to_string(),
        first_name: body.first_name,
        last_name: body.last_name,
        phone: body.phone,
    };

    match state.register_coach.handle(command).await {
        Ok(row) => (StatusCode::CREATED, Json(CoachView::from(row))).into_response(),
        Err(e) => error_response(e),
    }
}
