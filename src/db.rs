use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

const CREATE_USER: &str = r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id       SERIAL PRIMARY KEY,
        username VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL
    )
"#;

const CREATE_GAME_HISTORY: &str = r#"
    CREATE TABLE IF NOT EXISTS game_history (
        id         SERIAL PRIMARY KEY,
        username   VARCHAR(255),
        start_time VARCHAR(255),
        end_time   VARCHAR(255),
        score      VARCHAR(255),
        duration   VARCHAR(255)
    )
"#;

pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = &config.pool;
    PgPoolOptions::new()
        .max_connections(pool.max_connections())
        .acquire_timeout(pool.acquire_timeout())
        .max_lifetime(pool.max_lifetime())
        .connect(&config.database_url)
        .await
        .context("connect to database")
}

/// Create both tables if they are missing.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_USER)
        .execute(db)
        .await
        .context("create table user")?;
    sqlx::query(CREATE_GAME_HISTORY)
        .execute(db)
        .await
        .context("create table game_history")?;
    info!("database schema ready");
    Ok(())
}
