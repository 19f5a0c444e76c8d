use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::error;

use crate::metrics;

/// JSON error body: `{"error": "<kind>", "detail": "<message>"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }

    /// Store failures carry no detail; the driver message goes to the log only.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => {
                metrics::BOOK_NOT_FOUND_TOTAL.inc();
                JsonApiError::not_found("Book not found")
            }
            ServiceError::Db(msg) => {
                metrics::STORE_ERRORS_TOTAL.inc();
                error!(err = %msg, "store operation failed");
                JsonApiError::internal()
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.error, detail: self.detail.as_deref() };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let nf: JsonApiError = ServiceError::not_found("book").into();
        assert_eq!(nf.status, StatusCode::NOT_FOUND);
        assert_eq!(nf.detail.as_deref(), Some("Book not found"));

        let db: JsonApiError = ServiceError::Db("pool timed out".into()).into();
        assert_eq!(db.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.error, "Internal Server Error");
        assert_eq!(db.detail, None);
    }
}
