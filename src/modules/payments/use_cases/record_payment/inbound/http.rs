use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::payments::adapters::outbound::payment_repository::PaymentRepository;
use crate::modules::payments::use_cases::record_payment::command::RecordPayment;
use crate::shared::core::primitives::parse_date_or_today;
use crate::shared::infrastructure::http::{error_body, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordPaymentBody {
    pub student_id: String,
    pub course_id: String,
    pub month: String,
    pub amount: f64,
    pub payment_date: Option<String>,
    pub payment_method: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordPaymentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let payment_date = match parse_date_or_today(body.payment_date.as_deref()) {
        Ok(date) => date,
        Err(e) => return error_body(StatusCode::BAD_REQUEST, e),
    };

    let command = RecordPayment {
        payment_id: Uuid::now_v7().to_string(),
        student_id: body.student_id,
        course_id: body.course_id,
        month: body.month,
        amount: body.amount,
        payment_date,
        payment_method: body.payment_method,
    };

    match state.record_payment.handle(command).await {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_list(State(state): State<AppState>) -> impl IntoResponse {
    match state.payments.list_since(None).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => error_response(e.into()),
    }
}

pub async fn handle_delete(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> impl IntoResponse {
    match state.payments.delete(&payment_id).await {
        Ok(()) => {
            tracing::info!(%payment_id, "payment removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(e.into()),
    }
}
