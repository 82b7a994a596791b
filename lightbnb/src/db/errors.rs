use thiserror::Error;

/// Unified error type for database operations that application code can handle
///
/// A lookup that matches nothing is not an error: repositories return `Ok(None)` (or an empty
/// `Vec`) for that case, so an `Err` always means the statement itself failed.
#[derive(Error, Debug)]
pub enum DbError {
    /// A statement that must return a row returned none
    #[error("Entity not found")]
    NotFound,

    /// Unique constraint violation
    #[error("Unique constraint violation")]
    UniqueViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Foreign key constraint violation
    #[error("Foreign key constraint violation")]
    ForeignKeyViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Check constraint violation
    #[error("Check constraint violation")]
    CheckViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Catch-all for non-recoverable errors (connection loss, malformed SQL, ...)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convert from sqlx::Error using proper sqlx error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) => {
                let constraint = db_err.constraint().map(|s| s.to_string());
                let table = db_err.table().map(|s| s.to_string());
                let message = db_err.message().to_string();

                if db_err.is_unique_violation() {
                    DbError::UniqueViolation {
                        constraint,
                        table,
                        message,
                    }
                } else if db_err.is_foreign_key_violation() {
                    DbError::ForeignKeyViolation {
                        constraint,
                        table,
                        message,
                    }
                } else if db_err.is_check_violation() {
                    DbError::CheckViolation {
                        constraint,
                        table,
                        message,
                    }
                } else {
                    DbError::Other(anyhow::Error::from(err))
                }
            }
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

impl DbError {
    /// Returns a caller-safe message, without leaking SQL or connection details
    pub fn user_message(&self) -> String {
        match self {
            DbError::NotFound => "Resource not found".to_string(),
            DbError::UniqueViolation { constraint, table, .. } => match (table.as_deref(), constraint.as_deref()) {
                (Some("users"), Some(c)) if c.contains("email") => "An account with this email address already exists".to_string(),
                _ => "Resource already exists".to_string(),
            },
            DbError::ForeignKeyViolation { table, .. } => match table.as_deref() {
                Some("properties") => "The property owner does not exist".to_string(),
                _ => "Invalid reference to related resource".to_string(),
            },
            DbError::CheckViolation { .. } => "Invalid data provided".to_string(),
            DbError::Other(_) => "Database error occurred".to_string(),
        }
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::NotFound));
    }

    #[test]
    fn test_pool_errors_are_not_constraint_violations() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DbError::Other(_)));
        assert_eq!(err.user_message(), "Database error occurred");
    }

    #[test]
    fn test_user_message_for_duplicate_email() {
        let err = DbError::UniqueViolation {
            constraint: Some("users_email_key".to_string()),
            table: Some("users".to_string()),
            message: "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
        };
        assert_eq!(err.user_message(), "An account with this email address already exists");
    }

    #[test]
    fn test_user_message_for_unknown_owner() {
        let err = DbError::ForeignKeyViolation {
            constraint: Some("properties_owner_id_fkey".to_string()),
            table: Some("properties".to_string()),
            message: "insert or update on table \"properties\" violates foreign key constraint".to_string(),
        };
        assert_eq!(err.user_message(), "The property owner does not exist");
    }
}
