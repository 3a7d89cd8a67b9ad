use super::types::{BfhlResponse, HealthResponse};
use crate::{Error, dispatch::Dispatcher};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

#[derive(Clone)]
pub struct AppState {
    pub official_email: Arc<str>,
    pub dispatcher: Arc<Dispatcher>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        is_success: true,
        official_email: state.official_email.to_string(),
    })
}

pub async fn bfhl(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<BfhlResponse>) {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(BfhlResponse::failure(
                    &*state.official_email,
                    rejection.body_text(),
                )),
            );
        }
    };

    match state.dispatcher.dispatch(&body).await {
        Ok(data) => (
            StatusCode::OK,
            Json(BfhlResponse::success(&*state.official_email, data)),
        ),
        Err(e) => failure(&state, e),
    }
}

fn failure(state: &AppState, e: Error) -> (StatusCode, Json<BfhlResponse>) {
    let status = e.status_code();
    if status.is_server_error() {
        error!("Error processing request: {}", e);
    } else {
        warn!("Invalid request: {}", e);
    }

    (
        status,
        Json(BfhlResponse::failure(
            &*state.official_email,
            e.public_message(),
        )),
    )
}
