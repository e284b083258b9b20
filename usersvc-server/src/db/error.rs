//! Database error taxonomy

/// Database error type
///
/// Business outcomes (duplicate email, missing row) are variants rather than
/// driver errors so handlers can pick a status code without inspecting sqlx.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Could not reach, authenticate to, or check out from the database
    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("User not found")]
    NotFound { id: i32 },

    /// Any other failure while executing a statement
    #[error("{0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::DuplicateEmail,
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::Protocol(_) => Self::Connection(err),
            _ => Self::Query(err),
        }
    }
}
