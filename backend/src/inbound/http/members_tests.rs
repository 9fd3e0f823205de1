//! Tests for member HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MemberRepositoryError, MockMembersCommand, MockMembersQuery};
use crate::domain::{
    CurrencyCode, CurrencyResolutionError, MemberKind, MemberServiceError, MemberValidationError,
};
use crate::inbound::http::validation::{json_config, path_config};

fn test_app(
    command: MockMembersCommand,
    query: MockMembersQuery,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(command), Arc::new(query));
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .service(web::scope("/api/v1").configure(configure))
}

fn snapshot(id: i64, draft: &MemberDraft, currency: &str) -> MemberSnapshot {
    MemberSnapshot {
        id: MemberId::new(id),
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        salary: draft.salary,
        kind: draft.kind,
        contract_duration: draft.contract_duration,
        role: draft.role.clone(),
        tags: draft.tags.clone(),
        country: draft.country.clone(),
        currency: Some(CurrencyCode::new(currency).expect("valid code")),
    }
}

fn employee_payload() -> Value {
    json!({
        "firstName": "Ana",
        "lastName": "Souza",
        "salary": 5200.5,
        "type": "EMPLOYEE",
        "role": "Engineer",
        "tags": ["backend"],
        "country": "brasil"
    })
}

fn draft_from(payload: &Value) -> MemberDraft {
    serde_json::from_value(payload.clone()).expect("payload is a valid draft")
}

#[actix_web::test]
async fn create_returns_created_member_with_location() {
    let mut command = MockMembersCommand::new();
    command
        .expect_create()
        .withf(|draft: &MemberDraft| draft.country == "brasil" && draft.kind == MemberKind::Employee)
        .times(1)
        .returning(|draft| Ok(snapshot(1, &draft, "BRL")));
    let app = actix_test::init_service(test_app(command, MockMembersQuery::new())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/members")
        .set_json(employee_payload())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/api/v1/members/1")
    );
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["currency"], "BRL");
    assert_eq!(body["type"], "EMPLOYEE");
}

#[rstest]
#[case::client_supplied_currency("currency", json!("USD"))]
#[case::client_supplied_id("id", json!(99))]
#[case::unknown_kind("type", json!("INTERN"))]
#[actix_web::test]
async fn create_rejects_malformed_payloads(#[case] field: &str, #[case] value: Value) {
    let mut command = MockMembersCommand::new();
    command.expect_create().times(0);
    let app = actix_test::init_service(test_app(command, MockMembersQuery::new())).await;

    let mut payload = employee_payload();
    payload[field] = value;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/members")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_payload");
}

#[actix_web::test]
async fn create_reports_validation_failures_with_field() {
    let mut command = MockMembersCommand::new();
    command
        .expect_create()
        .times(1)
        .returning(|_| Err(MemberValidationError::EmployeeRoleRequired.into()));
    let app = actix_test::init_service(test_app(command, MockMembersQuery::new())).await;

    let mut payload = employee_payload();
    payload["role"] = Value::Null;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/members")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "employee role required");
    assert_eq!(body["details"]["field"], "role");
}

#[actix_web::test]
async fn create_reports_unknown_country() {
    let mut command = MockMembersCommand::new();
    command.expect_create().times(1).returning(|draft| {
        Err(CurrencyResolutionError::CountryNotFound {
            country: draft.country,
        }
        .into())
    });
    let app = actix_test::init_service(test_app(command, MockMembersQuery::new())).await;

    let mut payload = employee_payload();
    payload["country"] = json!("Unknown");
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/members")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "currency not found for country: Unknown");
}

#[actix_web::test]
async fn get_returns_member() {
    let mut query = MockMembersQuery::new();
    query
        .expect_find_by_id()
        .withf(|id| *id == MemberId::new(3))
        .times(1)
        .returning(|id| Ok(snapshot(id.get(), &draft_from(&employee_payload()), "BRL")));
    let app = actix_test::init_service(test_app(MockMembersCommand::new(), query)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/members/3")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["firstName"], "Ana");
}

#[actix_web::test]
async fn get_unknown_member_is_not_found() {
    let mut query = MockMembersQuery::new();
    query
        .expect_find_by_id()
        .returning(|id| Err(MemberServiceError::NotFound(id)));
    let app = actix_test::init_service(test_app(MockMembersCommand::new(), query)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/members/404")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn non_numeric_id_is_a_bad_request() {
    let mut query = MockMembersQuery::new();
    query.expect_find_by_id().times(0);
    let app = actix_test::init_service(test_app(MockMembersCommand::new(), query)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/members/abc")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "invalid_id");
}

#[actix_web::test]
async fn list_returns_members_in_service_order() {
    let mut query = MockMembersQuery::new();
    query.expect_find_all_members().times(1).returning(|| {
        let draft = draft_from(&employee_payload());
        Ok(vec![snapshot(1, &draft, "BRL"), snapshot(2, &draft, "BRL")])
    });
    let app = actix_test::init_service(test_app(MockMembersCommand::new(), query)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/members")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<Value> = actix_test::read_body_json(res).await;
    let ids: Vec<i64> = body.iter().filter_map(|m| m["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[actix_web::test]
async fn list_failure_is_redacted() {
    let mut query = MockMembersQuery::new();
    query.expect_find_all_members().returning(|| {
        Err(MemberServiceError::Persistence {
            message: "failed to retrieve members".to_owned(),
            source: MemberRepositoryError::query("relation \"members\" does not exist"),
        })
    });
    let app = actix_test::init_service(test_app(MockMembersCommand::new(), query)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/members")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Internal server error");
}

#[actix_web::test]
async fn update_passes_identity_and_draft() {
    let mut command = MockMembersCommand::new();
    command
        .expect_update()
        .withf(|id, draft| *id == MemberId::new(5) && draft.first_name == "Ana")
        .times(1)
        .returning(|id, draft| Ok(snapshot(id.get(), &draft, "BRL")));
    let app = actix_test::init_service(test_app(command, MockMembersQuery::new())).await;

    let req = actix_test::TestRequest::put()
        .uri("/api/v1/members/5")
        .set_json(employee_payload())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["id"], 5);
}

#[rstest]
#[case::deleted(None, StatusCode::NO_CONTENT)]
#[case::missing(Some("missing"), StatusCode::NOT_FOUND)]
#[case::referenced(Some("conflict"), StatusCode::CONFLICT)]
#[actix_web::test]
async fn delete_maps_outcomes(#[case] failure: Option<&'static str>, #[case] expected: StatusCode) {
    let mut command = MockMembersCommand::new();
    command
        .expect_delete_by_id()
        .times(1)
        .returning(move |id| match failure {
            None => Ok(()),
            Some("missing") => Err(MemberServiceError::NotFound(id)),
            Some(_) => Err(MemberServiceError::Conflict(id)),
        });
    let app = actix_test::init_service(test_app(command, MockMembersQuery::new())).await;

    let req = actix_test::TestRequest::delete()
        .uri("/api/v1/members/8")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), expected);
}
