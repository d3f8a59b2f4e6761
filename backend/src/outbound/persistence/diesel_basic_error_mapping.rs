//! Translation of pool and Diesel failures into [`RepositoryError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    RepositoryError::connection(error.into_message())
}

/// PostgreSQL wording for SQLSTATE 22001, which Diesel reports as `Unknown`.
const VALUE_TOO_LONG: &str = "value too long";

/// Unique violations keep the constraint name so the HTTP layer can report
/// which value collided. Other integrity failures become constraint
/// violations; everything else collapses to a generic message.
pub(crate) fn map_diesel_error(error: DieselError) -> RepositoryError {
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
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepositoryError::unique_violation(info.constraint_name().unwrap_or("unique constraint"))
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::ForeignKeyViolation,
            info,
        ) => RepositoryError::constraint_violation(
            info.constraint_name()
                .map_or_else(|| info.message().to_owned(), |name| format!("value violates {name}")),
        ),
        DieselError::DatabaseError(DatabaseErrorKind::Unknown, info)
            if info.message().starts_with(VALUE_TOO_LONG) =>
        {
            RepositoryError::constraint_violation(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        _ => RepositoryError::query("database error"),
    }
}
