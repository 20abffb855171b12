use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// A queried relation does not exist in this deployment's schema.
    /// The chapter table is schema-optional, so callers probe for this
    /// variant and treat it as a disabled feature, not a failure.
    #[error("Relation missing: {0}")]
    RelationMissing(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            diesel::result::Error::DatabaseError(_, info) => {
                let message = info.message().to_string();
                // Postgres reports SQLSTATE 42P01 as `relation "..." does not exist`
                if message.starts_with("relation") && message.contains("does not exist") {
                    AppError::RelationMissing(message)
                } else {
                    AppError::DatabaseError(message)
                }
            }
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::StoreUnavailable(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("Serialization error: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::DatabaseErrorKind;

    #[test]
    fn missing_relation_is_classified_as_feature_signal() {
        let err = diesel::result::Error::DatabaseError(
            DatabaseErrorKind::Unknown,
            Box::new(String::from("relation \"chapters\" does not exist")),
        );
        assert!(matches!(AppError::from(err), AppError::RelationMissing(_)));
    }

    #[test]
    fn other_database_errors_stay_database_errors() {
        let err = diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(String::from("duplicate key value violates unique constraint")),
        );
        assert!(matches!(AppError::from(err), AppError::DatabaseError(_)));
    }

    #[test]
    fn not_found_maps_to_not_found() {
        assert!(matches!(
            AppError::from(diesel::result::Error::NotFound),
            AppError::NotFound(_)
        ));
    }
}
