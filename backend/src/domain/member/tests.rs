//! Tests for member model parsing and validation.

use super::*;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use serde_json::json;

#[fixture]
fn employee() -> MemberDraft {
    MemberDraft {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        salary: Some(Decimal::new(5_000_000, 2)),
        kind: MemberKind::Employee,
        contract_duration: None,
        role: Some("Engineer".to_owned()),
        tags: Some(vec!["core".to_owned()]),
        country: "brasil".to_owned(),
    }
}

#[rstest]
#[case("EMPLOYEE", MemberKind::Employee)]
#[case("employee", MemberKind::Employee)]
#[case(" Contractor ", MemberKind::Contractor)]
fn member_kind_parses_case_insensitively(#[case] input: &str, #[case] expected: MemberKind) {
    let parsed: MemberKind = input.parse().expect("known kind");
    assert_eq!(parsed, expected);
}

#[rstest]
fn member_kind_rejects_unknown_values() {
    let error = "intern".parse::<MemberKind>().expect_err("unknown kind");
    assert_eq!(error.input, "intern");
}

#[rstest]
fn member_kind_serialises_upper_case() {
    let value = serde_json::to_value(MemberKind::Contractor).expect("serialise kind");
    assert_eq!(value, json!("CONTRACTOR"));
}

#[rstest]
fn currency_code_rejects_blank_values() {
    assert_eq!(CurrencyCode::new("  "), Err(EmptyCurrencyCode));
    assert_eq!(CurrencyCode::new(" BRL ").map(String::from), Ok("BRL".to_owned()));
}

#[rstest]
fn valid_employee_passes(employee: MemberDraft) {
    assert_eq!(employee.validate(), Ok(()));
}

#[rstest]
#[case::absent(None)]
#[case::empty(Some(""))]
#[case::whitespace(Some("   "))]
fn employee_without_role_is_rejected(mut employee: MemberDraft, #[case] role: Option<&str>) {
    employee.role = role.map(str::to_owned);
    assert_eq!(
        employee.validate(),
        Err(MemberValidationError::EmployeeRoleRequired)
    );
}

#[rstest]
fn contractor_without_role_is_accepted(mut employee: MemberDraft) {
    employee.kind = MemberKind::Contractor;
    employee.role = None;
    employee.contract_duration = Some(12);
    assert_eq!(employee.validate(), Ok(()));
}

#[rstest]
fn blank_names_are_rejected(mut employee: MemberDraft) {
    employee.last_name = " ".to_owned();
    let error = employee.validate().expect_err("blank last name");
    assert_eq!(error.field(), "lastName");
    assert_eq!(error.code(), "blank_field");
}

#[rstest]
fn blank_country_is_rejected(mut employee: MemberDraft) {
    employee.country = String::new();
    let error = employee.validate().expect_err("blank country");
    assert_eq!(error, MemberValidationError::BlankField { field: "country" });
}

#[rstest]
fn negative_salary_is_rejected(mut employee: MemberDraft) {
    employee.salary = Some(Decimal::new(-1, 0));
    assert_eq!(employee.validate(), Err(MemberValidationError::NegativeSalary));
}

#[rstest]
fn zero_salary_is_accepted(mut employee: MemberDraft) {
    employee.salary = Some(Decimal::ZERO);
    assert_eq!(employee.validate(), Ok(()));
}

#[rstest]
#[case::just_over(Some(MAX_CONTRACT_DURATION + 1), false)]
#[case::largest(Some(u32::MAX), false)]
#[case::at_limit(Some(MAX_CONTRACT_DURATION), true)]
#[case::absent(None, true)]
fn contract_duration_is_capped(
    mut employee: MemberDraft,
    #[case] months: Option<u32>,
    #[case] accepted: bool,
) {
    employee.contract_duration = months;
    let expected = if accepted {
        Ok(())
    } else {
        Err(MemberValidationError::ContractDurationTooLarge)
    };
    assert_eq!(employee.validate(), expected);
}

#[rstest]
fn empty_tag_list_is_rejected(mut employee: MemberDraft) {
    employee.tags = Some(Vec::new());
    assert_eq!(employee.validate(), Err(MemberValidationError::EmptyTags));
}

#[rstest]
fn absent_tags_are_accepted(mut employee: MemberDraft) {
    employee.tags = None;
    assert_eq!(employee.validate(), Ok(()));
}

#[rstest]
fn draft_deserialises_wire_names() {
    let draft: MemberDraft = serde_json::from_value(json!({
        "firstName": "Grace",
        "lastName": "Hopper",
        "salary": 1200.5,
        "type": "contractor",
        "contractDuration": 6,
        "tags": ["navy"],
        "country": "UKE",
    }))
    .expect("draft deserialises");

    assert_eq!(draft.kind, MemberKind::Contractor);
    assert_eq!(draft.contract_duration, Some(6));
    assert_eq!(draft.salary, Some(Decimal::new(12005, 1)));
    assert!(draft.role.is_none());
}

#[rstest]
#[case::currency(json!({"currency": "BRL"}))]
#[case::identity(json!({"id": 4}))]
fn draft_rejects_derived_fields(#[case] extra: serde_json::Value) {
    let mut payload = json!({
        "firstName": "Grace",
        "lastName": "Hopper",
        "type": "EMPLOYEE",
        "role": "Admiral",
        "country": "UKE",
    });
    if let (Some(target), Some(source)) = (payload.as_object_mut(), extra.as_object()) {
        target.extend(source.clone());
    }

    assert!(serde_json::from_value::<MemberDraft>(payload).is_err());
}

#[rstest]
fn new_member_with_id_keeps_fields(employee: MemberDraft) {
    let new_member = NewMember {
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        salary: employee.salary,
        kind: employee.kind,
        contract_duration: employee.contract_duration,
        role: employee.role.clone(),
        tags: employee.tags.clone(),
        country: employee.country.clone(),
        currency: CurrencyCode::new("BRL").ok(),
    };

    let member = new_member.clone().with_id(MemberId::new(9));
    assert_eq!(member.id.get(), 9);
    assert_eq!(member.first_name, new_member.first_name);
    assert_eq!(member.currency, new_member.currency);
}
