use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::coaches::core::coach::CoachView;
use crate::modules::coaches::use_cases::update_coach::command::UpdateCoach;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateCoachBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(coach_id): Path<String>,
    body: Result<Json<UpdateCoachBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateCoach {
        coach_id,
        first_name: body.first_name,
        last_name: body.last_name,
        phone: body.phone,
    };

    match state.update_coach.handle(command).await {
        Ok(row) => Json(CoachView::from(row)).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod update_coach_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::coaches::adapters::outbound::coach_repository::CoachRepository;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::coaches::make_coach_row;

    use super::handle;

    async fn app() -> Router {
        let state = AppState::in_memory();
        state
            .coaches
            .insert(make_coach_row("coach-1", "Dana", "Levi", "052-1"))
            .await
            .unwrap();
        Router::new()
            .route("/api/coaches/{id}", put(handle))
            .with_state(state)
    }

    fn put_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::put(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_the_updated_coach() {
        let response = app()
            .await
            .oneshot(put_json("/api/coaches/coach-1", r#"{"last_name":"Katz"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["full_name"], "Dana Katz");
        assert_eq!(json["phone"], "052-1");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_coach() {
        let response = app()
            .await
            .oneshot(put_json("/api/coaches/missing", r#"{"phone":"052-7"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
