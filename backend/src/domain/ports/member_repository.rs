//! Driven port for member persistence.
//!
//! The store owns durability and identity assignment. It enforces no business
//! rules; those live in the member service.

use async_trait::async_trait;

use crate::domain::{Member, MemberId, NewMember};

use super::define_port_error;

define_port_error! {
    /// Errors raised by member repository adapters.
    pub enum MemberRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "member repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "member repository query failed: {message}",
        /// The mutation violates a referential constraint.
        Conflict { message: String } =>
            "member repository conflict: {message}",
        /// The keyed row does not exist.
        Missing { id: i64 } =>
            "member {id} does not exist",
    }
}

/// Port for member storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Persist a new member and return it with its assigned identity.
    async fn insert(&self, member: &NewMember) -> Result<Member, MemberRepositoryError>;

    /// Overwrite the row keyed by `member.id`.
    ///
    /// Returns [`MemberRepositoryError::Missing`] when the row is gone.
    async fn update(&self, member: &Member) -> Result<Member, MemberRepositoryError>;

    /// Fetch a member by identity.
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, MemberRepositoryError>;

    /// Fetch every member in ascending identity order.
    async fn find_all(&self) -> Result<Vec<Member>, MemberRepositoryError>;

    /// Remove a member.
    ///
    /// Returns [`MemberRepositoryError::Conflict`] when other records still
    /// reference the member; the row is left in place.
    async fn delete_by_id(&self, id: MemberId) -> Result<(), MemberRepositoryError>;
}
