//! HTTP inbound adapter exposing the member roster REST endpoints.

pub mod error;
pub mod health;
pub mod members;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
