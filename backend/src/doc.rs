//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the member and health endpoints plus the schema
//! mirrors from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds and `cargo run --bin openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, MemberDraftSchema, MemberKindSchema, MemberSnapshotSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Member roster API",
        description = "Create, read, update and delete team members. Each member's currency is derived from its country.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::members::create_member,
        crate::inbound::http::members::list_members,
        crate::inbound::http::members::get_member,
        crate::inbound::http::members::update_member,
        crate::inbound::http::members::delete_member,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        MemberKindSchema,
        MemberDraftSchema,
        MemberSnapshotSchema
    )),
    tags(
        (name = "members", description = "Member roster operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
