//! Shared response envelope for API handlers.
//!
//! Every response, success or error, carries the same top-level shape:
//! `{ "status": "success" | "error", "code": <http status>, ... }`.
//! Success responses add `data` and `message`; error responses are built in
//! [`crate::error`] and add `message` plus optional field `errors`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Success envelope: `{ status, code, message, data }`.
///
/// Implements [`IntoResponse`], setting the HTTP status to match `code`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    pub code: u16,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// 200 OK envelope.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success",
            code: StatusCode::OK.as_u16(),
            message: message.into(),
            data,
        }
    }

    /// 201 Created envelope.
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success",
            code: StatusCode::CREATED.as_u16(),
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
