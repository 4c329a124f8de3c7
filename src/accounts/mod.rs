use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod services;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::account_routes())
}
