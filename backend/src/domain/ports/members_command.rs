//! Driving port for member mutations.
//!
//! Inbound adapters call this port to create, update, and delete members.
//! Every mutation re-derives the member's currency from its country.

use async_trait::async_trait;

use crate::domain::{MemberDraft, MemberId, MemberServiceError, MemberSnapshot};

/// Driving port for member mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembersCommand: Send + Sync {
    /// Create a member and return it with its identity and currency.
    ///
    /// # Errors
    ///
    /// - [`MemberServiceError::CurrencyResolution`] when the country has no
    ///   resolvable currency. Checked before validation.
    /// - [`MemberServiceError::Validation`] when field rules fail.
    /// - [`MemberServiceError::Persistence`] when the store fails.
    async fn create(&self, draft: MemberDraft) -> Result<MemberSnapshot, MemberServiceError>;

    /// Replace a member's fields, keeping its identity.
    ///
    /// # Errors
    ///
    /// As [`MembersCommand::create`], plus [`MemberServiceError::NotFound`]
    /// when no member has `id`. The lookup happens first.
    async fn update(
        &self,
        id: MemberId,
        draft: MemberDraft,
    ) -> Result<MemberSnapshot, MemberServiceError>;

    /// Delete a member.
    ///
    /// # Errors
    ///
    /// - [`MemberServiceError::NotFound`] when no member has `id`.
    /// - [`MemberServiceError::Conflict`] when other records reference it.
    /// - [`MemberServiceError::Persistence`] when the store fails.
    async fn delete_by_id(&self, id: MemberId) -> Result<(), MemberServiceError>;
}
