use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{AccountStore, GameHistoryRecord, NewGameHistory, StoreError, User};

/// Postgres-backed store. Writes run in their own transaction; an error
/// before `commit` drops the transaction, which rolls it back.
#[derive(Clone)]
pub struct PgAccountStore {
    db: PgPool,
}

impl PgAccountStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub fn pool(&self) -> &PgPool {
        &self.db
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn insert_user(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let mut tx = self.db.begin().await?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_one(&mut *tx)
        .await
        .map_err(StoreError::from_sqlx)?;
        tx.commit().await?;

        debug!(user_id = user.id, "user row inserted");
        Ok(user)
    }

    async fn find_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password
            FROM "user"
            WHERE username = $1 AND password = $2
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn insert_history(
        &self,
        record: NewGameHistory,
    ) -> Result<GameHistoryRecord, StoreError> {
        let mut tx = self.db.begin().await?;
        let row = sqlx::query_as::<_, GameHistoryRecord>(
            r#"
            INSERT INTO game_history (username, start_time, end_time, score, duration)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, start_time, end_time, score, duration
            "#,
        )
        .bind(record.username)
        .bind(record.start_time)
        .bind(record.end_time)
        .bind(record.score)
        .bind(record.duration)
        .fetch_one(&mut *tx)
        .await
        .map_err(StoreError::from_sqlx)?;
        tx.commit().await?;

        debug!(history_id = row.id, "game history row inserted");
        Ok(row)
    }

    async fn list_history_by_username(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<GameHistoryRecord>, StoreError> {
        let rows = sqlx::query_as::<_, GameHistoryRecord>(
            r#"
            SELECT id, username, start_time, end_time, score, duration
            FROM game_history
            WHERE username IS NOT DISTINCT FROM $1
            "#,
        )
        .bind(username)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
