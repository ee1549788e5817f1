use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::courses::adapters::outbound::meeting_repository::MeetingRepository;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> impl IntoResponse {
    match state.meetings.delete(&meeting_id).await {
        Ok(attendance_removed) => {
            tracing::info!(%meeting_id, attendance_removed, "meeting deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(e.into()),
    }
}

#[cfg(test)]
mod cancel_meeting_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use tower::ServiceExt;

    use crate::modules::courses::adapters::outbound::meeting_repository::MeetingRepository;
    use crate::modules::courses::core::meeting::roll_call;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::meetings::make_meeting_row;

    use super::handle;

    #[tokio::test]
    async fn it_should_delete_the_meeting_and_its_sheet() {
        let state = AppState::in_memory();
        state
            .meetings
            .insert(
                make_meeting_row("m-1", "course-fixed-0001", "2025-07-01"),
                roll_call("m-1", &["student-1".to_string()], &[]),
            )
            .await
            .unwrap();
        let router = Router::new()
            .route("/api/meetings/{id}", delete(handle))
            .with_state(state.clone());

        let first = router
            .clone()
            .oneshot(Request::delete("/api/meetings/m-1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let second = router
            .oneshot(Request::delete("/api/meetings/m-1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(first.status(), StatusCode::NO_CONTENT);
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
        assert!(state.meetings.attendance("m-1").await.unwrap().is_empty());
    }
}
