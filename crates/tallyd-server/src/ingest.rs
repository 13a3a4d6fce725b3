//! HTTP ingestion handler.
//!
//! Translates the core's outcome into transport status signaling:
//! success -> 200 with empty body, NotFound -> 404, BadRequest -> 400.
//! Rejections carry a small JSON error body with the stable client code.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use tallyd_core::error::{ClientCode, TallydError};
use tallyd_core::update::apply_update;

use crate::app_state::AppState;

pub async fn handle_update(
    State(app): State<AppState>,
    Path((kind, name, value)): Path<(String, String, String)>,
) -> Response {
    match apply_update(app.store(), &kind, &name, &value) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => reject(err),
    }
}

fn reject(err: TallydError) -> Response {
    let code = err.client_code();
    tracing::debug!(code = code.as_str(), %err, "update rejected");
    let body = Json(json!({
        "error": {
            "code": code.as_str(),
            "msg": err.to_string(),
        }
    }));
    (status_for(code), body).into_response()
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
