use thiserror::Error;

/// Everything a request handler can fail with. `Display` is exactly the
/// message shown to the client; diagnostic detail stays in the `Storage`
/// source and is only ever logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("User ID already exists")]
    Conflict,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error")]
    Storage(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        // The uniqueness constraint on users.user_id is the authoritative
        // duplicate check; the pre-insert lookup is only a fast path.
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return AppError::Conflict;
            }
        }
        AppError::Storage(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_only_the_user_facing_message() {
        assert_eq!(
            AppError::Validation("All fields required").to_string(),
            "All fields required"
        );
        assert_eq!(AppError::Conflict.to_string(), "User ID already exists");
        assert_eq!(
            AppError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn storage_display_hides_the_underlying_fault() {
        let e = AppError::Storage(anyhow::anyhow!("connection refused on 5432"));
        assert_eq!(e.to_string(), "Database error");
    }

    #[test]
    fn non_constraint_sqlx_errors_map_to_storage() {
        let e = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(e, AppError::Storage(_)));
        assert_eq!(e.to_string(), "Database error");
    }

    #[test]
    fn pool_errors_map_to_storage() {
        let e = AppError::from(sqlx::Error::PoolClosed);
        assert!(matches!(e, AppError::Storage(_)));
    }
}
