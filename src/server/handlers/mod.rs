//! HTTP handlers for the server.

pub mod banks;
pub mod boleto;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

fn error_response(status: StatusCode, error_msg: &str) -> Response {
    (status, Json(json!({ "error": error_msg }))).into_response()
}
