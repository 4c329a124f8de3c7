use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{field, instrument, Span};

use crate::{
    error::{MessageResponse, ServiceError},
    history::{
        dto::{GameHistoryItem, HistoryQuery, RecordHistoryQuery},
        services,
    },
    query::QueryPairs,
    state::AppState,
};

pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/game_history", get(record_game_history))
        .route("/get_game_history", get(get_game_history))
}

#[instrument(skip_all, fields(username = field::Empty))]
pub async fn record_game_history(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Result<(StatusCode, Json<MessageResponse>), ServiceError> {
    let query = RecordHistoryQuery::from_pairs(&pairs);
    Span::current().record("username", field::debug(&query.username));
    services::record(state.store.as_ref(), query).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Game history recorded successfully")),
    ))
}

#[instrument(skip_all, fields(username = field::Empty))]
pub async fn get_game_history(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Result<Json<Vec<GameHistoryItem>>, ServiceError> {
    let query = HistoryQuery::from_pairs(&pairs);
    Span::current().record("username", field::debug(&query.username));
    let items = services::list(state.store.as_ref(), query.username.as_deref()).await?;
    Ok(Json(items))
}
