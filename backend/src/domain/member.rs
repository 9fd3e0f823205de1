//! Member data model.
//!
//! Three shapes describe a member:
//! - [`MemberDraft`] is what callers submit. It never carries an identity or
//!   a currency.
//! - [`NewMember`] and [`Member`] are the persisted shapes, before and after
//!   the store assigns an identity.
//! - [`MemberSnapshot`] is what callers read back, including the identity and
//!   the derived currency.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Longest contract duration a member record can hold.
pub const MAX_CONTRACT_DURATION: u32 = i32::MAX.unsigned_abs();

/// Store-assigned member identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    /// Wrap a raw identity value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identity value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for MemberId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Member classification.
///
/// Serialised as `EMPLOYEE` or `CONTRACTOR`; parsing ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum MemberKind {
    /// Salaried staff; must carry a role.
    Employee,
    /// Fixed-term contractor.
    Contractor,
}

impl MemberKind {
    /// Canonical upper-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::Contractor => "CONTRACTOR",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown member kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown member type: {input}")]
pub struct ParseMemberKindError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::str::FromStr for MemberKind {
    type Err = ParseMemberKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("employee") {
            Ok(Self::Employee)
        } else if trimmed.eq_ignore_ascii_case("contractor") {
            Ok(Self::Contractor)
        } else {
            Err(ParseMemberKindError {
                input: s.to_owned(),
            })
        }
    }
}

impl TryFrom<String> for MemberKind {
    type Error = ParseMemberKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Currency code derived from a member's country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

/// Error returned for blank currency codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("currency code must not be blank")]
pub struct EmptyCurrencyCode;

impl CurrencyCode {
    /// Validate and wrap a currency code.
    ///
    /// # Errors
    /// Returns [`EmptyCurrencyCode`] when the value is blank.
    pub fn new(code: impl Into<String>) -> Result<Self, EmptyCurrencyCode> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(EmptyCurrencyCode);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = EmptyCurrencyCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validation failures for member input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemberValidationError {
    /// A required text field was empty or whitespace.
    #[error("{field} must not be blank")]
    BlankField {
        /// Wire name of the offending field.
        field: &'static str,
    },
    /// Salary was below zero.
    #[error("salary must not be negative")]
    NegativeSalary,
    /// Contract duration exceeded [`MAX_CONTRACT_DURATION`].
    #[error("contract duration must not exceed 2147483647")]
    ContractDurationTooLarge,
    /// Tags were supplied as an empty list.
    #[error("tags must contain at least one entry when present")]
    EmptyTags,
    /// An employee was submitted without a role.
    #[error("employee role required")]
    EmployeeRoleRequired,
}

impl MemberValidationError {
    /// Wire name of the field the failure relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::BlankField { field } => *field,
            Self::NegativeSalary => "salary",
            Self::ContractDurationTooLarge => "contractDuration",
            Self::EmptyTags => "tags",
            Self::EmployeeRoleRequired => "role",
        }
    }

    /// Stable machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BlankField { .. } => "blank_field",
            Self::NegativeSalary => "negative_salary",
            Self::ContractDurationTooLarge => "contract_duration_too_large",
            Self::EmptyTags => "empty_tags",
            Self::EmployeeRoleRequired => "employee_role_required",
        }
    }
}

/// Member data as submitted by callers.
///
/// Unknown keys are rejected, so `id` and `currency` cannot be smuggled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemberDraft {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub salary: Option<Decimal>,
    #[serde(rename = "type")]
    pub kind: MemberKind,
    #[serde(default)]
    pub contract_duration: Option<u32>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub country: String,
}

impl MemberDraft {
    /// Check field rules and the employee role rule.
    ///
    /// Field rules are checked in declaration order; the role rule last.
    ///
    /// # Errors
    /// Returns the first [`MemberValidationError`] encountered.
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        if self.salary.is_some_and(|salary| salary < Decimal::ZERO) {
            return Err(MemberValidationError::NegativeSalary);
        }
        if self
            .contract_duration
            .is_some_and(|months| months > MAX_CONTRACT_DURATION)
        {
            return Err(MemberValidationError::ContractDurationTooLarge);
        }
        if self.tags.as_ref().is_some_and(Vec::is_empty) {
            return Err(MemberValidationError::EmptyTags);
        }
        require_text("country", &self.country)?;
        if self.kind == MemberKind::Employee && !has_text(self.role.as_deref()) {
            return Err(MemberValidationError::EmployeeRoleRequired);
        }
        Ok(())
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

fn require_text(field: &'static str, value: &str) -> Result<(), MemberValidationError> {
    if value.trim().is_empty() {
        return Err(MemberValidationError::BlankField { field });
    }
    Ok(())
}

/// Persisted-shape member that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub salary: Option<Decimal>,
    pub kind: MemberKind,
    pub contract_duration: Option<u32>,
    pub role: Option<String>,
    pub tags: Option<Vec<String>>,
    pub country: String,
    pub currency: Option<CurrencyCode>,
}

impl NewMember {
    /// Attach the store-assigned identity.
    #[must_use]
    pub fn with_id(self, id: MemberId) -> Member {
        Member {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            salary: self.salary,
            kind: self.kind,
            contract_duration: self.contract_duration,
            role: self.role,
            tags: self.tags,
            country: self.country,
            currency: self.currency,
        }
    }
}

/// Stored member record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub salary: Option<Decimal>,
    pub kind: MemberKind,
    pub contract_duration: Option<u32>,
    pub role: Option<String>,
    pub tags: Option<Vec<String>>,
    pub country: String,
    pub currency: Option<CurrencyCode>,
}

/// Member data as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSnapshot {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub salary: Option<Decimal>,
    #[serde(rename = "type")]
    pub kind: MemberKind,
    pub contract_duration: Option<u32>,
    pub role: Option<String>,
    pub tags: Option<Vec<String>>,
    pub country: String,
    pub currency: Option<CurrencyCode>,
}

#[cfg(test)]
mod tests;
