//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`; these
//! mirrors register their wire shape with utoipa instead.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested member does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The member is still referenced elsewhere.
    #[schema(rename = "conflict")]
    Conflict,
    /// A dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "employee role required")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::MemberKind`].
#[derive(ToSchema)]
#[schema(as = domain::MemberKind)]
pub enum MemberKindSchema {
    /// Salaried staff; requires a role.
    #[schema(rename = "EMPLOYEE")]
    Employee,
    /// Fixed-term contractor.
    #[schema(rename = "CONTRACTOR")]
    Contractor,
}

/// OpenAPI schema for [`crate::domain::MemberDraft`].
///
/// `id` and `currency` are server-owned and rejected when present.
#[derive(ToSchema)]
#[schema(as = domain::MemberDraft, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MemberDraftSchema {
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    /// Non-negative decimal, accepted as a number or a string.
    #[schema(value_type = Option<String>, example = "4200.50")]
    salary: Option<String>,
    #[schema(rename = "type")]
    kind: MemberKindSchema,
    /// Contract length in months.
    #[schema(example = 12, minimum = 0)]
    contract_duration: Option<u32>,
    /// Required for employees.
    #[schema(example = "Engineer")]
    role: Option<String>,
    /// When present, must hold at least one tag.
    tags: Option<Vec<String>>,
    /// Country name used to resolve the currency.
    #[schema(example = "brasil")]
    country: String,
}

/// OpenAPI schema for [`crate::domain::MemberSnapshot`].
#[derive(ToSchema)]
#[schema(as = domain::MemberSnapshot, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MemberSnapshotSchema {
    #[schema(example = 1)]
    id: i64,
    first_name: String,
    last_name: String,
    /// Decimal rendered as a string.
    #[schema(value_type = Option<String>, example = "4200.50")]
    salary: Option<String>,
    #[schema(rename = "type")]
    kind: MemberKindSchema,
    contract_duration: Option<u32>,
    role: Option<String>,
    tags: Option<Vec<String>>,
    country: String,
    /// ISO 4217 code resolved from `country`.
    #[schema(example = "BRL")]
    currency: Option<String>,
}
