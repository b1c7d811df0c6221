//! Print and preview handlers.
//!
//! Both compile the request in full before doing anything else, so a
//! malformed operation or unsupported character never reaches the printer.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::TicketeraError;
use crate::job::Job;
use crate::json_api::PrintRequest;

use super::super::state::AppState;

/// Decode a request body as JSON whatever its `Content-Type`.
///
/// Point-of-sale clients and plain `curl -d` send form or text content types.
fn parse_request(body: &[u8]) -> Result<PrintRequest, TicketeraError> {
    Ok(serde_json::from_slice(body)?)
}

/// Handle POST / - compile the operations and send them to the printer.
pub async fn print(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => return error_response(e),
    };
    if request.printer.is_empty() {
        return error_response(TicketeraError::InvalidRequest(
            "printer identifier is empty".to_string(),
        ));
    }

    let job = match Job::compile(&request, &state.encoder) {
        Ok(job) => job,
        Err(e) => return error_response(e.into()),
    };

    let delivery = state.delivery.clone();
    let Job { printer, bytes } = job;
    let len = bytes.len();
    let print_result = tokio::task::spawn_blocking(move || {
        delivery.deliver(&printer, &bytes).map(|()| printer)
    })
    .await;

    match print_result {
        Ok(Ok(printer)) => {
            info!(printer = %printer, bytes = len, "print job completed");
            (
                StatusCode::OK,
                Json(json!({ "success": true, "printer": printer, "bytes": len })),
            )
                .into_response()
        }
        Ok(Err(e)) => error_response(e),
        Err(e) => error_response(TicketeraError::Delivery(format!("Task error: {}", e))),
    }
}

/// Handle POST /preview - return the compiled job without printing it.
pub async fn preview(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => return error_response(e),
    };
    match Job::compile(&request, &state.encoder) {
        Ok(job) => (
            [(header::CONTENT_TYPE, "application/octet-stream")],
            job.bytes,
        )
            .into_response(),
        Err(e) => error_response(e.into()),
    }
}

fn error_response(error: TicketeraError) -> Response {
    let status = if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    warn!(status = status.as_u16(), error = %error, "print request failed");
    (
        status,
        Json(json!({ "success": false, "error": error.to_string() })),
    )
        .into_response()
}
