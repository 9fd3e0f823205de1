//! Extractor configuration and request-shape validation.
//!
//! Malformed bodies and path identifiers are reported as `invalid_request`
//! domain errors so every 400 shares the same JSON shape.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// JSON extractor settings used by the member routes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(json_error_handler)
}

/// Path extractor settings used by the member routes.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected JSON payload");
    json_payload_error(&err).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected path parameters");
    Error::invalid_request("member id must be an integer")
        .with_details(json!({
            "field": "id",
            "code": "invalid_id",
        }))
        .into()
}

pub(crate) fn json_payload_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::Deserialize(source) => {
            Error::invalid_request(format!("invalid member payload: {source}")).with_details(
                json!({
                    "code": "invalid_payload",
                    "line": source.line(),
                    "column": source.column(),
                }),
            )
        }
        JsonPayloadError::ContentType => {
            Error::invalid_request("request body must be application/json")
                .with_details(json!({ "code": "unsupported_content_type" }))
        }
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            Error::invalid_request("request body is too large")
                .with_details(json!({ "code": "payload_too_large", "limit": limit }))
        }
        other => Error::invalid_request(format!("unreadable request body: {other}"))
            .with_details(json!({ "code": "invalid_payload" })),
    }
}
