//! Process-local member store used when no database is configured.
//!
//! Identities increase monotonically from `1` and are never reused, matching
//! the behaviour of the PostgreSQL sequence.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{MemberRepository, MemberRepositoryError};
use crate::domain::{Member, MemberId, NewMember};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    members: BTreeMap<i64, Member>,
    referenced: BTreeSet<i64>,
}

/// In-memory implementation of [`MemberRepository`].
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    store: RwLock<Store>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that another entity points at `id`.
    ///
    /// Deleting a referenced member fails with
    /// [`MemberRepositoryError::Conflict`] until [`Self::release`] is called.
    pub async fn mark_referenced(&self, id: MemberId) {
        self.store.write().await.referenced.insert(id.get());
    }

    /// Drop a reference recorded by [`Self::mark_referenced`].
    pub async fn release(&self, id: MemberId) {
        self.store.write().await.referenced.remove(&id.get());
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn insert(&self, member: &NewMember) -> Result<Member, MemberRepositoryError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let id = store.last_id;
        let stored = member.clone().with_id(MemberId::new(id));
        store.members.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, member: &Member) -> Result<Member, MemberRepositoryError> {
        let mut store = self.store.write().await;
        match store.members.get_mut(&member.id.get()) {
            Some(slot) => {
                slot.clone_from(member);
                Ok(member.clone())
            }
            None => Err(MemberRepositoryError::missing(member.id.get())),
        }
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, MemberRepositoryError> {
        Ok(self.store.read().await.members.get(&id.get()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>, MemberRepositoryError> {
        Ok(self.store.read().await.members.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: MemberId) -> Result<(), MemberRepositoryError> {
        let mut store = self.store.write().await;
        if store.referenced.contains(&id.get()) {
            return Err(MemberRepositoryError::conflict(format!(
                "member {id} is referenced by other records"
            )));
        }
        store
            .members
            .remove(&id.get())
            .map(|_| ())
            .ok_or_else(|| MemberRepositoryError::missing(id.get()))
    }
}
