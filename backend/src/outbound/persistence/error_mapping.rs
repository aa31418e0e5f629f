//! Shared Diesel and pool error mapping for the repositories.
//!
//! Each repository error enum has `connection` and `query` constructors; the
//! helpers here take those constructors so the classification of Diesel
//! failures lives in one place.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::UserId;
use crate::domain::ports::AcronymRepositoryError;

use super::pool::PoolError;

/// Constraint guarding `acronyms.user_id`.
pub(crate) const ACRONYM_OWNER_FKEY: &str = "acronyms_user_id_fkey";

/// Map pool errors into a repository-specific connection error.
pub(crate) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

fn log_diesel_error(error: &DieselError) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = ?info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            %error,
            "diesel operation failed"
        ),
    }
}

/// Classify a Diesel error as a connection or query failure.
pub(crate) fn map_diesel_error<E>(
    error: DieselError,
    query: impl FnOnce(&'static str) -> E,
    connection: impl FnOnce(&'static str) -> E,
) -> E {
    log_diesel_error(&error);
    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand,
            _,
        ) => connection("database connection error"),
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}

/// Map failures of acronym inserts and updates.
///
/// A foreign-key violation on the owner constraint means `owner` does not
/// exist; any other violation is logged and reported as a query failure.
pub(crate) fn map_acronym_write_error(error: DieselError, owner: UserId) -> AcronymRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) = &error {
        if references_owner(info.message(), info.constraint_name()) {
            debug!(user_id = %owner, "acronym owner does not exist");
            return AcronymRepositoryError::unknown_user(owner.get());
        }
        warn!(
            message = info.message(),
            constraint_name = ?info.constraint_name(),
            "unrecognised foreign key violation"
        );
        return AcronymRepositoryError::query("foreign key violation");
    }
    map_acronym_error(error)
}

/// Map failures of any other acronym query.
pub(crate) fn map_acronym_error(error: DieselError) -> AcronymRepositoryError {
    map_diesel_error(
        error,
        AcronymRepositoryError::query,
        AcronymRepositoryError::connection,
    )
}

fn references_owner(message: &str, constraint_name: Option<&str>) -> bool {
    constraint_name.is_some_and(|name| name == ACRONYM_OWNER_FKEY)
        || message.contains(ACRONYM_OWNER_FKEY)
}
