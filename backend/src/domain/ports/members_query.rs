//! Driving port for member reads.

use async_trait::async_trait;

use crate::domain::{MemberId, MemberServiceError, MemberSnapshot};

/// Driving port for member reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembersQuery: Send + Sync {
    /// Fetch one member.
    ///
    /// # Errors
    /// [`MemberServiceError::NotFound`] when no member has `id`.
    async fn find_by_id(&self, id: MemberId) -> Result<MemberSnapshot, MemberServiceError>;

    /// Fetch every member in store order.
    ///
    /// # Errors
    /// [`MemberServiceError::Persistence`] when the store cannot enumerate.
    async fn find_all_members(&self) -> Result<Vec<MemberSnapshot>, MemberServiceError>;
}
