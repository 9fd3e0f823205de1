//! Member roster HTTP handlers.
//!
//! ```text
//! POST   /api/v1/members
//! GET    /api/v1/members
//! GET    /api/v1/members/{id}
//! PUT    /api/v1/members/{id}
//! DELETE /api/v1/members/{id}
//! ```
//!
//! Handlers only translate between HTTP and the member ports; currency
//! resolution and validation happen in the domain.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{MemberDraft, MemberId, MemberSnapshot};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MemberDraftSchema, MemberSnapshotSchema};
use crate::inbound::http::state::HttpState;

/// Register the member routes on a scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_member)
        .service(list_members)
        .service(get_member)
        .service(update_member)
        .service(delete_member);
}

fn member_location(member: &MemberSnapshot) -> String {
    format!("/api/v1/members/{}", member.id)
}

/// Create a member.
#[utoipa::path(
    post,
    path = "/api/v1/members",
    request_body = MemberDraftSchema,
    responses(
        (
            status = 201,
            description = "Member created",
            headers(("Location" = String, description = "URI of the new member")),
            body = MemberSnapshotSchema
        ),
        (status = 400, description = "Invalid member or unknown country", body = ErrorSchema),
        (status = 503, description = "Currency lookup or store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "createMember"
)]
#[post("/members")]
pub async fn create_member(
    state: web::Data<HttpState>,
    payload: web::Json<MemberDraft>,
) -> ApiResult<HttpResponse> {
    let member = state.members.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, member_location(&member)))
        .json(member))
}

/// List every member in ascending identity order.
#[utoipa::path(
    get,
    path = "/api/v1/members",
    responses(
        (status = 200, description = "All members", body = [MemberSnapshotSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "listMembers"
)]
#[get("/members")]
pub async fn list_members(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<MemberSnapshot>>> {
    let members = state.members_query.find_all_members().await?;
    Ok(web::Json(members))
}

/// Fetch one member.
#[utoipa::path(
    get,
    path = "/api/v1/members/{id}",
    params(("id" = i64, Path, description = "Member identity")),
    responses(
        (status = 200, description = "Member", body = MemberSnapshotSchema),
        (status = 400, description = "Malformed identity", body = ErrorSchema),
        (status = 404, description = "No such member", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "getMember"
)]
#[get("/members/{id}")]
pub async fn get_member(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<MemberSnapshot>> {
    let member = state
        .members_query
        .find_by_id(MemberId::new(path.into_inner()))
        .await?;
    Ok(web::Json(member))
}

/// Replace a member's fields and recompute its currency.
#[utoipa::path(
    put,
    path = "/api/v1/members/{id}",
    params(("id" = i64, Path, description = "Member identity")),
    request_body = MemberDraftSchema,
    responses(
        (status = 200, description = "Updated member", body = MemberSnapshotSchema),
        (status = 400, description = "Invalid member or unknown country", body = ErrorSchema),
        (status = 404, description = "No such member", body = ErrorSchema),
        (status = 503, description = "Currency lookup or store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "updateMember"
)]
#[put("/members/{id}")]
pub async fn update_member(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<MemberDraft>,
) -> ApiResult<web::Json<MemberSnapshot>> {
    let member = state
        .members
        .update(MemberId::new(path.into_inner()), payload.into_inner())
        .await?;
    Ok(web::Json(member))
}

/// Delete a member.
#[utoipa::path(
    delete,
    path = "/api/v1/members/{id}",
    params(("id" = i64, Path, description = "Member identity")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "No such member", body = ErrorSchema),
        (status = 409, description = "Member is still referenced", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "deleteMember"
)]
#[delete("/members/{id}")]
pub async fn delete_member(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .members
        .delete_by_id(MemberId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "members_tests.rs"]
mod tests;
