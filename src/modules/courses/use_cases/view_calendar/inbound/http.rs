use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::courses::core::calendar::CalendarEvent;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::parse_date_or_today;
use crate::shared::infrastructure::http::{error_body, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct DayQuery {
    pub date: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct WindowQuery {
    pub start_date: Option<String>,
}

fn respond(result: Result<Vec<CalendarEvent>, ApplicationError>) -> Response {
    match result {
        Ok(events) => Json(events).into_response(),
        Err(e) => error_response(e),
    }
}

fn resolve(raw: Option<&str>) -> Result<NaiveDate, Response> {
    parse_date_or_today(raw).map_err(|e| error_body(StatusCode::BAD_REQUEST, e))
}

pub async fn handle_daily(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> impl IntoResponse {
    match resolve(query.date.as_deref()) {
        Ok(date) => respond(state.view_calendar.daily(date).await),
        Err(rejection) => rejection,
    }
}

pub async fn handle_weekly(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> impl IntoResponse {
    match resolve(query.start_date.as_deref()) {
        Ok(date) => respond(state.view_calendar.weekly(date).await),
        Err(rejection) => rejection,
    }
}

pub async fn handle_monthly(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> impl IntoResponse {
    match resolve(query.start_date.as_deref()) {
        Ok(date) => respond(state.view_calendar.monthly(date).await),
        Err(rejection) => rejection,
    }
}
