use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::courses::use_cases::record_meeting::command::RecordMeeting;
use crate::shared::core::primitives::parse_date_or_today;
use crate::shared::infrastructure::http::{error_body, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordMeetingBody {
    pub date: Option<String>,
    #[serde(default)]
    pub notes: String,
    /// Ids of the students who attended.
    #[serde(default)]
    pub attendance: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    body: Result<Json<RecordMeetingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let date = match parse_date_or_today(body.date.as_deref()) {
        Ok(date) => date,
        Err(e) => return error_body(StatusCode::BAD_REQUEST, e),
    };

    let command = RecordMeeting {
        meeting_id: Uuid::now_v7().to_string(),
        course_id,
        date,
        notes: body.notes,
        present: body.attendance,
    };

    match state.record_meeting.handle(command).await {
        Ok(meeting) => (StatusCode::CREATED, Json(meeting)).into_response(),
        Err(e) => error_response(e),
    }
}
