//! Field-by-field copies between the member shapes.
//!
//! None of these functions touch currency on the way in. The service sets it
//! after resolving the country.

use super::{Member, MemberDraft, MemberSnapshot, NewMember};

/// Build an unsaved record from a draft. Currency is left unset.
pub fn to_entity(draft: &MemberDraft) -> NewMember {
    NewMember {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        salary: draft.salary,
        kind: draft.kind,
        contract_duration: draft.contract_duration,
        role: draft.role.clone(),
        tags: draft.tags.clone(),
        country: draft.country.clone(),
        currency: None,
    }
}

/// Copy a stored record into the caller-facing shape.
pub fn to_wire(member: &Member) -> MemberSnapshot {
    MemberSnapshot {
        id: member.id,
        first_name: member.first_name.clone(),
        last_name: member.last_name.clone(),
        salary: member.salary,
        kind: member.kind,
        contract_duration: member.contract_duration,
        role: member.role.clone(),
        tags: member.tags.clone(),
        country: member.country.clone(),
        currency: member.currency.clone(),
    }
}

/// Overwrite every draft field on `member`.
///
/// Optional fields absent from the draft are cleared. Identity and currency
/// are untouched.
pub fn merge_into(draft: &MemberDraft, member: &mut Member) {
    member.first_name.clone_from(&draft.first_name);
    member.last_name.clone_from(&draft.last_name);
    member.salary = draft.salary;
    member.kind = draft.kind;
    member.contract_duration = draft.contract_duration;
    member.role.clone_from(&draft.role);
    member.tags.clone_from(&draft.tags);
    member.country.clone_from(&draft.country);
}
