//! Member roster backend library.
//!
//! Hexagonal layout: [`domain`] holds the model, rules and ports;
//! [`inbound`] and [`outbound`] hold the HTTP and storage/upstream adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
