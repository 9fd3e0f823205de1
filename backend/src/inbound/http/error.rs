//! HTTP adapter mapping for domain errors.
//!
//! The domain error stays HTTP-agnostic; this module picks the status code,
//! echoes the trace identifier and hides internal failure details.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::ports::MemberRepositoryError;
use crate::domain::{
    CurrencyResolutionError, Error, ErrorCode, MemberServiceError, TRACE_ID_HEADER,
};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let redacted = Error::internal("Internal server error");
        match error.trace_id() {
            Some(id) => redacted.with_trace_id(id),
            None => redacted,
        }
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

fn currency_error(err: CurrencyResolutionError) -> Error {
    let details = json!({
        "field": "country",
        "value": err.country(),
        "code": err.code(),
    });
    match err {
        CurrencyResolutionError::Upstream { .. } => {
            Error::service_unavailable("currency lookup is temporarily unavailable")
                .with_details(details)
        }
        other => Error::invalid_request(other.to_string()).with_details(details),
    }
}

impl From<MemberServiceError> for Error {
    fn from(err: MemberServiceError) -> Self {
        match err {
            MemberServiceError::Validation(validation) => {
                Error::invalid_request(validation.to_string()).with_details(json!({
                    "field": validation.field(),
                    "code": validation.code(),
                }))
            }
            MemberServiceError::CurrencyResolution(resolution) => currency_error(resolution),
            MemberServiceError::NotFound(id) => Error::not_found(format!("member {id} not found"))
                .with_details(json!({ "id": id.get() })),
            MemberServiceError::Conflict(id) => Error::conflict(format!(
                "member {id} is still referenced and cannot be deleted"
            ))
            .with_details(json!({ "id": id.get() })),
            MemberServiceError::Persistence {
                source: MemberRepositoryError::Connection { .. },
                ..
            } => Error::service_unavailable("member store is temporarily unavailable"),
            MemberServiceError::Persistence { message, .. } => Error::internal(message),
        }
    }
}
