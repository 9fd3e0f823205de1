//! Member domain service.
//!
//! Implements the member driving ports. Every write resolves the country's
//! currency first, then validates, then maps and persists. Nothing is retried;
//! every failure is terminal for the call.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use super::member_mapping::{merge_into, to_entity, to_wire};
use super::ports::{MemberRepository, MemberRepositoryError, MembersCommand, MembersQuery};
use super::{
    CurrencyCode, CurrencyResolutionError, CurrencyResolver, Member, MemberDraft, MemberId,
    MemberSnapshot, MemberValidationError,
};

/// Failures reported by the member service.
#[derive(Debug, thiserror::Error)]
pub enum MemberServiceError {
    /// Input broke a field rule or the employee role rule.
    #[error(transparent)]
    Validation(#[from] MemberValidationError),
    /// The country could not be resolved to a currency.
    #[error(transparent)]
    CurrencyResolution(#[from] CurrencyResolutionError),
    /// No member has the identity.
    #[error("member {0} not found")]
    NotFound(MemberId),
    /// The member is still referenced and cannot be deleted.
    #[error("member {0} is still referenced and cannot be deleted")]
    Conflict(MemberId),
    /// The store failed.
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: MemberRepositoryError,
    },
}

/// Member service implementing [`MembersCommand`] and [`MembersQuery`].
pub struct MemberService<R, C> {
    repository: Arc<R>,
    resolver: Arc<C>,
}

impl<R, C> Clone for MemberService<R, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl<R, C> MemberService<R, C> {
    /// Create a service over a store and a currency resolver.
    pub fn new(repository: Arc<R>, resolver: Arc<C>) -> Self {
        Self {
            repository,
            resolver,
        }
    }
}

impl<R, C> MemberService<R, C>
where
    R: MemberRepository,
    C: CurrencyResolver,
{
    async fn resolve_currency(&self, country: &str) -> Result<CurrencyCode, MemberServiceError> {
        self.resolver.resolve(country).await.map_err(|err| {
            warn!(country, error = %err, "currency resolution failed");
            MemberServiceError::from(err)
        })
    }

    fn validate(draft: &MemberDraft) -> Result<(), MemberServiceError> {
        draft.validate().map_err(|err| {
            warn!(field = err.field(), error = %err, "member validation failed");
            MemberServiceError::from(err)
        })
    }

    fn persistence(message: String, source: MemberRepositoryError) -> MemberServiceError {
        error!(error = %source, "{message}");
        MemberServiceError::Persistence { message, source }
    }

    async fn load(&self, id: MemberId) -> Result<Member, MemberServiceError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| Self::persistence(format!("failed to load member {id}"), err))?
            .ok_or(MemberServiceError::NotFound(id))
    }
}

#[async_trait]
impl<R, C> MembersCommand for MemberService<R, C>
where
    R: MemberRepository,
    C: CurrencyResolver,
{
    async fn create(&self, draft: MemberDraft) -> Result<MemberSnapshot, MemberServiceError> {
        let currency = self.resolve_currency(&draft.country).await?;
        Self::validate(&draft)?;

        let mut entity = to_entity(&draft);
        entity.currency = Some(currency);
        let stored = self
            .repository
            .insert(&entity)
            .await
            .map_err(|err| Self::persistence("failed to persist new member".to_owned(), err))?;

        info!(member_id = %stored.id, "member created");
        Ok(to_wire(&stored))
    }

    async fn update(
        &self,
        id: MemberId,
        draft: MemberDraft,
    ) -> Result<MemberSnapshot, MemberServiceError> {
        let mut member = self.load(id).await?;
        let currency = self.resolve_currency(&draft.country).await?;
        Self::validate(&draft)?;

        merge_into(&draft, &mut member);
        member.currency = Some(currency);
        let stored = self.repository.update(&member).await.map_err(|err| match err {
            MemberRepositoryError::Missing { .. } => MemberServiceError::NotFound(id),
            other => Self::persistence(format!("failed to update member {id}"), other),
        })?;

        info!(member_id = %stored.id, "member updated");
        Ok(to_wire(&stored))
    }

    async fn delete_by_id(&self, id: MemberId) -> Result<(), MemberServiceError> {
        self.load(id).await?;
        self.repository
            .delete_by_id(id)
            .await
            .map_err(|err| match err {
                MemberRepositoryError::Conflict { message } => {
                    warn!(member_id = %id, reason = %message, "member delete blocked");
                    MemberServiceError::Conflict(id)
                }
                MemberRepositoryError::Missing { .. } => MemberServiceError::NotFound(id),
                other => Self::persistence(format!("failed to delete member {id}"), other),
            })?;

        info!(member_id = %id, "member deleted");
        Ok(())
    }
}

#[async_trait]
impl<R, C> MembersQuery for MemberService<R, C>
where
    R: MemberRepository,
    C: CurrencyResolver,
{
    async fn find_by_id(&self, id: MemberId) -> Result<MemberSnapshot, MemberServiceError> {
        self.load(id).await.map(|member| to_wire(&member))
    }

    async fn find_all_members(&self) -> Result<Vec<MemberSnapshot>, MemberServiceError> {
        let members = self.repository.find_all().await.map_err(|err| {
            Self::persistence("failed to retrieve members".to_owned(), err)
        })?;
        Ok(members.iter().map(to_wire).collect())
    }
}

#[cfg(test)]
#[path = "member_service_tests.rs"]
mod tests;
