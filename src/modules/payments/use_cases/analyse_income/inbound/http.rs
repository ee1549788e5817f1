use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::payments::core::income::Period;
use crate::shared::core::primitives::today;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct PeriodQuery {
    pub period: Option<String>,
}

impl PeriodQuery {
    fn period(&self) -> Period {
        self.period
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

pub async fn handle_coach_income(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> impl IntoResponse {
    match state
        .analyse_income
        .coach_income(query.period(), today())
        .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_course_income(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> impl IntoResponse {
    match state
        .analyse_income
        .course_income(query.period(), today())
        .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_summary(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> impl IntoResponse {
    match state.analyse_income.summary(query.period(), today()).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => error_response(e),
    }
}
