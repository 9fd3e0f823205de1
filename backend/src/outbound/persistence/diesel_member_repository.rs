//! PostgreSQL-backed `MemberRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MemberRepository, MemberRepositoryError};
use crate::domain::{Member, MemberId, NewMember};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{InvalidColumn, MemberChangeset, MemberRow, NewMemberRow};
use super::pool::DbPool;
use super::schema::members;

/// Diesel-backed member store.
#[derive(Clone)]
pub struct DieselMemberRepository {
    pool: DbPool,
}

impl DieselMemberRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_invalid_column(error: InvalidColumn) -> MemberRepositoryError {
    MemberRepositoryError::query(error.to_string())
}

fn row_to_member(row: MemberRow) -> Result<Member, MemberRepositoryError> {
    Member::try_from(row).map_err(map_invalid_column)
}

#[async_trait]
impl MemberRepository for DieselMemberRepository {
    async fn insert(&self, member: &NewMember) -> Result<Member, MemberRepositoryError> {
        let new_row = NewMemberRow::from_domain(member).map_err(map_invalid_column)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: MemberRow = diesel::insert_into(members::table)
            .values(&new_row)
            .returning(MemberRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_member(row)
    }

    async fn update(&self, member: &Member) -> Result<Member, MemberRepositoryError> {
        let changeset =
            MemberChangeset::from_domain(member, Utc::now()).map_err(map_invalid_column)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MemberRow> = diesel::update(members::table.find(member.id.get()))
            .set(&changeset)
            .returning(MemberRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        match row {
            Some(row) => row_to_member(row),
            None => Err(MemberRepositoryError::missing(member.id.get())),
        }
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, MemberRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MemberRow> = members::table
            .find(id.get())
            .select(MemberRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_member).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Member>, MemberRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MemberRow> = members::table
            .order(members::id.asc())
            .select(MemberRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_member).collect()
    }

    async fn delete_by_id(&self, id: MemberId) -> Result<(), MemberRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(members::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(MemberRepositoryError::missing(id.get()));
        }
        Ok(())
    }
}
