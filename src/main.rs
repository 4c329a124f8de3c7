mod accounts;
mod app;
mod config;
mod db;
mod error;
mod history;
mod query;
mod repo;
mod state;

use crate::state::AppState;

/// `RUST_LOG` picks the filter; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "playlog=debug,axum=info,tower_http=info".to_string());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.with_target(false).json().init(),
        _ => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    // Fails fast if the database is unreachable or the schema can't be created.
    let app_state = AppState::init().await.map_err(|e| {
        tracing::error!(error = ?e, "startup failed");
        e
    })?;

    let addr = app_state.config.bind_addr();
    let app = app::build_app(app_state);
    app::serve(app, &addr).await
}
