//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Team members.
    ///
    /// `id` is assigned by the database sequence. `currency` is derived from
    /// `country` on every write and never supplied by clients.
    members (id) {
        /// Primary key assigned on insert.
        id -> Int8,
        first_name -> Text,
        last_name -> Text,
        /// Optional salary, stored without scale truncation.
        salary -> Nullable<Numeric>,
        /// `EMPLOYEE` or `CONTRACTOR`.
        member_type -> Text,
        /// Contract length in months, never negative.
        contract_duration -> Nullable<Int4>,
        role -> Nullable<Text>,
        /// `NULL` when the member has no tag list at all.
        tags -> Nullable<Array<Text>>,
        /// Country name as supplied by the client.
        country -> Text,
        /// ISO 4217 code resolved from `country`.
        currency -> Nullable<Text>,
        created_at -> Timestamptz,
        /// Last modification timestamp, set by the repository on update.
        updated_at -> Timestamptz,
    }
}
