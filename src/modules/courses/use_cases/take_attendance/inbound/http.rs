use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::courses::use_cases::take_attendance::command::{
    AttendanceMark, TakeAttendance,
};
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AttendanceMarkBody {
    pub student_id: String,
    pub present: bool,
}

#[derive(Deserialize)]
pub struct TakeAttendanceBody {
    pub attendance: Vec<AttendanceMarkBody>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
    body: Result<Json<TakeAttendanceBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = TakeAttendance {
        meeting_id,
        marks: body
            .attendance
            .into_iter()
            .map(|mark| AttendanceMark {
                student_id: mark.student_id,
                present: mark.present,
            })
            .collect(),
    };

    match state.take_attendance.handle(command).await {
        Ok(updated) => {
            Json(json!({ "message": "Attendance saved", "updated": updated })).into_response()
        }
        Err(e) => error_response(e),
    }
}
