//! HTTP adapter mapping for domain errors.
//!
//! Every failure a handler can produce is a [`crate::domain::Error`]; this
//! module is the single place that decides its status code and body shape.
//! Extractor failures (malformed JSON, query strings, path ids) and routing
//! misses are funnelled into the same type so clients only ever see
//! [`ErrorResponse`].

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, FieldViolation, TraceId};

const REDACTED_MESSAGE: &str = "Internal server error";

/// One violated constraint in an error body.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailedError {
    /// Offending field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Constraint message.
    pub message: String,
    /// Entity the field belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
    /// Value that failed the constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub rejected_value: Option<Value>,
}

impl From<&FieldViolation> for DetailedError {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field().map(str::to_owned),
            message: violation.message().to_owned(),
            object_name: violation.object_name().map(str::to_owned),
            rejected_value: violation.rejected_value().cloned(),
        }
    }
}

/// Body attached to every error response.
///
/// Example JSON:
/// `{"timestamp":"2024-05-17T09:00:00Z","httpStatus":"NOT_FOUND","httpStatusCode":404,"message":"Photo not found for this id :: 7"}`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// Upper snake case reason phrase, e.g. `NOT_FOUND`.
    pub http_status: String,
    /// Numeric status code.
    pub http_status_code: u16,
    /// Human-readable summary.
    pub message: String,
    /// Per-field violations; omitted when there are none.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub detailed_errors: Vec<DetailedError>,
}

impl ErrorResponse {
    /// Render `error` as it leaves the process.
    pub fn from_error(error: &Error, timestamp: DateTime<Utc>) -> Self {
        let status = status_for(error);
        Self {
            timestamp,
            http_status: status_name(status),
            http_status_code: status.as_u16(),
            message: public_message(error),
            detailed_errors: error.violations().iter().map(DetailedError::from).collect(),
        }
    }
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::EmptyCollection => StatusCode::NO_CONTENT,
        Error::PageOutOfRange { .. }
        | Error::InvalidArgument { .. }
        | Error::UnresolvableSortField { .. }
        | Error::ValidationFailure { .. }
        | Error::RouteNotFound { .. } => StatusCode::BAD_REQUEST,
        Error::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
        .replace([' ', '-'], "_")
}

fn public_message(error: &Error) -> String {
    match error {
        Error::Internal { .. } => REDACTED_MESSAGE.to_owned(),
        other => other.to_string(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = TraceId::current().map(|id| id.to_string());
        if status.is_server_error() {
            warn!(error = %self, status = status.as_u16(), trace_id, "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), trace_id, "request rejected");
        }
        HttpResponse::build(status).json(ErrorResponse::from_error(self, Utc::now()))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(err.to_string())
    }
}

/// JSON body extractor configuration reporting failures as
/// [`Error::InvalidArgument`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            Error::invalid_argument(format!("Malformed JSON request body: {err}")).into()
        })
}

/// Query string extractor configuration reporting failures as
/// [`Error::InvalidArgument`].
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
            Error::invalid_argument(format!("Invalid query parameter: {err}")).into()
        })
}

/// Path extractor configuration reporting failures as
/// [`Error::InvalidArgument`].
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, req: &HttpRequest| {
        Error::invalid_argument(format!("Invalid path '{}': {err}", req.path())).into()
    })
}

/// Default service: any unmatched method and URL pair.
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::route_not_found(
        req.method().as_str(),
        req.uri().to_string(),
    ))
}

#[cfg(test)]
mod tests;
