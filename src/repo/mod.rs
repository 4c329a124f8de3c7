#[cfg(test)]
mod memory;
mod pg;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
pub use memory::MemoryAccountStore;
pub use pg::PgAccountStore;
pub use types::{GameHistoryRecord, NewGameHistory, User};

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    Duplicate,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Classify a driver error, pulling unique violations out of the generic bucket.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                StoreError::Duplicate
            }
            _ => StoreError::Database(err),
        }
    }
}

/// Data access for accounts and game history.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn insert_user(&self, username: &str, password: &str) -> Result<User, StoreError>;

    /// Exact, case-sensitive match on both columns at once.
    async fn find_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError>;

    async fn insert_history(&self, record: NewGameHistory)
        -> Result<GameHistoryRecord, StoreError>;

    /// `None` matches rows stored without a username.
    async fn list_history_by_username(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<GameHistoryRecord>, StoreError>;
}
