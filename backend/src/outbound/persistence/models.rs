//! Internal Diesel row structs for the `members` table.
//!
//! These types never leave the persistence layer; conversions to and from the
//! domain happen here so the repository stays a thin query wrapper.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::domain::{CurrencyCode, Member, MemberId, MemberKind, NewMember};

use super::schema::members;

/// Row struct for reading from the members table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MemberRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub salary: Option<Decimal>,
    pub member_type: String,
    pub contract_duration: Option<i32>,
    pub role: Option<String>,
    pub tags: Option<Vec<String>>,
    pub country: String,
    pub currency: Option<String>,
}

/// Insertable struct for creating member records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = members)]
pub(crate) struct NewMemberRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub salary: Option<Decimal>,
    pub member_type: &'static str,
    pub contract_duration: Option<i32>,
    pub role: Option<&'a str>,
    pub tags: Option<&'a [String]>,
    pub country: &'a str,
    pub currency: Option<&'a str>,
}

/// Changeset overwriting every mutable column.
///
/// `treat_none_as_null` makes cleared optionals reach the database as `NULL`
/// instead of being skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = members)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct MemberChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub salary: Option<Decimal>,
    pub member_type: &'static str,
    pub contract_duration: Option<i32>,
    pub role: Option<&'a str>,
    pub tags: Option<&'a [String]>,
    pub country: &'a str,
    pub currency: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

/// A stored value the domain cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column {column} holds an unsupported value: {value}")]
pub(crate) struct InvalidColumn {
    pub column: &'static str,
    pub value: String,
}

fn contract_duration_to_db(value: Option<u32>) -> Result<Option<i32>, InvalidColumn> {
    value
        .map(|months| {
            i32::try_from(months).map_err(|_| InvalidColumn {
                column: "contract_duration",
                value: months.to_string(),
            })
        })
        .transpose()
}

impl<'a> NewMemberRow<'a> {
    pub(crate) fn from_domain(member: &'a NewMember) -> Result<Self, InvalidColumn> {
        Ok(Self {
            first_name: &member.first_name,
            last_name: &member.last_name,
            salary: member.salary,
            member_type: member.kind.as_str(),
            contract_duration: contract_duration_to_db(member.contract_duration)?,
            role: member.role.as_deref(),
            tags: member.tags.as_deref(),
            country: &member.country,
            currency: member.currency.as_ref().map(CurrencyCode::as_str),
        })
    }
}

impl<'a> MemberChangeset<'a> {
    pub(crate) fn from_domain(member: &'a Member, now: DateTime<Utc>) -> Result<Self, InvalidColumn> {
        Ok(Self {
            first_name: &member.first_name,
            last_name: &member.last_name,
            salary: member.salary,
            member_type: member.kind.as_str(),
            contract_duration: contract_duration_to_db(member.contract_duration)?,
            role: member.role.as_deref(),
            tags: member.tags.as_deref(),
            country: &member.country,
            currency: member.currency.as_ref().map(CurrencyCode::as_str),
            updated_at: now,
        })
    }
}

impl TryFrom<MemberRow> for Member {
    type Error = InvalidColumn;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let kind: MemberKind = row.member_type.parse().map_err(|_| InvalidColumn {
            column: "member_type",
            value: row.member_type.clone(),
        })?;
        let contract_duration = row
            .contract_duration
            .map(|months| {
                u32::try_from(months).map_err(|_| InvalidColumn {
                    column: "contract_duration",
                    value: months.to_string(),
                })
            })
            .transpose()?;
        let currency = row
            .currency
            .map(|code| {
                CurrencyCode::new(code.as_str()).map_err(|_| InvalidColumn {
                    column: "currency",
                    value: code.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            id: MemberId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            salary: row.salary,
            kind,
            contract_duration,
            role: row.role,
            tags: row.tags,
            country: row.country,
            currency,
        })
    }
}
