use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// The storage layer failed. The message may be redacted in production.
    Db(String),
    /// The reservation was rejected before reaching storage.
    InvalidReservation(String),
}

impl From<sea_orm::DbErr> for RepoError {
    fn from(e: sea_orm::DbErr) -> Self {
        RepoError::Db(e.to_string())
    }
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoError::Db(message) => write!(f, "Database error: {}", message),
            RepoError::InvalidReservation(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for RepoError {}
