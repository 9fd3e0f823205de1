//! Diesel and pool error mapping for the member store.

use tracing::debug;

use crate::domain::ports::MemberRepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> MemberRepositoryError {
    debug!(error = %error, "connection pool failure");
    MemberRepositoryError::connection(error.message())
}

/// Map Diesel failures onto [`MemberRepositoryError`].
///
/// Foreign-key violations become conflicts so a delete of a referenced member
/// leaves the row in place and reports why.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> MemberRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            MemberRepositoryError::conflict(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            MemberRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => MemberRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => MemberRepositoryError::query("database query error"),
        _ => MemberRepositoryError::query("database error"),
    }
}
