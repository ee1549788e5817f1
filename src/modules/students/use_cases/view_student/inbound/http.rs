use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::student::StudentView;
use crate::shared::core::primitives::today;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

pub async fn handle_list(State(state): State<AppState>) -> impl IntoResponse {
    let today = today();
    match state.students.list().await {
        Ok(rows) => {
            let views: Vec<StudentView> =
                rows.into_iter().map(|row| StudentView::on(row, today)).collect();
            Json(views).into_response()
        }
        Err(e) => error_response(e.into()),
    }
}

pub async fn handle_get(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> impl IntoResponse {
    match state.students.get(&student_id).await {
        Ok(row) => Json(StudentView::on(row, today())).into_response(),
        Err(e) => error_response(e.into()),
    }
}

pub async fn handle_payments(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> impl IntoResponse {
    match state.view_student.payments(&student_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_courses(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> impl IntoResponse {
    match state.view_student.courses(&student_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => error_response(e),
    }
}
