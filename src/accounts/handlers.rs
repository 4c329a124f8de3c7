use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{field, instrument, Span};

use crate::{
    accounts::{dto::CredentialsQuery, services},
    error::{MessageResponse, ServiceError},
    query::QueryPairs,
    state::AppState,
};

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(register))
        .route("/verify", get(verify))
}

#[instrument(skip_all, fields(username = field::Empty))]
pub async fn register(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Result<(StatusCode, Json<MessageResponse>), ServiceError> {
    let query = CredentialsQuery::from_pairs(&pairs);
    Span::current().record("username", field::debug(&query.username));
    let creds = services::require_credentials(query)?;
    services::register(state.store.as_ref(), &creds).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

#[instrument(skip_all, fields(username = field::Empty))]
pub async fn verify(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Result<(StatusCode, Json<MessageResponse>), ServiceError> {
    let query = CredentialsQuery::from_pairs(&pairs);
    Span::current().record("username", field::debug(&query.username));
    let creds = services::require_credentials(query)?;
    services::verify(state.store.as_ref(), &creds).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Password verified successfully")),
    ))
}
