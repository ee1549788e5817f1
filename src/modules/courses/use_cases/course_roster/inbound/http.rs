use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::students::core::student::StudentView;
use crate::shared::core::primitives::today;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RosterEntryBody {
    #[serde(flatten)]
    pub student: StudentView,
    pub enrollment_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> impl IntoResponse {
    let today = today();
    match state.course_roster.roster(&course_id).await {
        Ok(roster) => {
            let body: Vec<RosterEntryBody> = roster
                .into_iter()
                .map(|entry| RosterEntryBody {
                    student: StudentView::on(entry.student, today),
                    enrollment_id: entry.enrollment_id,
                })
                .collect();
            Json(body).into_response()
        }
        Err(e) => error_response(e),
    }
}
