use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::coaches::adapters::outbound::coach_repository::CoachRepository;
use crate::modules::coaches::core::coach::CoachView;
use crate::modules::courses::adapters::outbound::course_repository::CourseRepository;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

pub async fn handle_list(State(state): State<AppState>) -> impl IntoResponse {
    match state.coaches.list().await {
        Ok(rows) => {
            let views: Vec<CoachView> = rows.into_iter().map(CoachView::from).collect();
            Json(views).into_response()
        }
        Err(e) => error_response(e.into()),
    }
}

pub async fn handle_get(
    State(state): State<AppState>,
    Path(coach_id): Path<String>,
) -> impl IntoResponse {
    match state.coaches.get(&coach_id).await {
        Ok(row) => Json(CoachView::from(row)).into_response(),
        Err(e) => error_response(e.into()),
    }
}

/// Courses whose teacher field matches the coach's full name.
pub async fn handle_courses(
    State(state): State<AppState>,
    Path(coach_id): Path<String>,
) -> impl IntoResponse {
    let coach = match state.coaches.get(&coach_id).await {
        Ok(coach) => coach,
        Err(e) => return error_response(e.into()),
    };
    let full_name = coach.full_name();
    match state.courses.list().await {
        Ok(mut rows) => {
            rows.retain(|course| course.teacher == full_name);
            Json(rows).into_response()
        }
        Err(e) => error_response(e.into()),
    }
}
