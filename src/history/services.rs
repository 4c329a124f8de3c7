use tracing::{debug, info};

use crate::{
    error::{Operation, ServiceError},
    history::dto::{GameHistoryItem, RecordHistoryQuery, NOT_RECORDED},
    repo::{AccountStore, GameHistoryRecord, NewGameHistory},
};

/// Missing times fall back to the sentinel; everything else is kept as sent.
pub(crate) fn new_history(q: RecordHistoryQuery) -> NewGameHistory {
    NewGameHistory {
        username: q.username,
        start_time: Some(q.start_time.unwrap_or_else(|| NOT_RECORDED.to_string())),
        end_time: Some(q.end_time.unwrap_or_else(|| NOT_RECORDED.to_string())),
        score: q.score,
        duration: String::new(),
    }
}

pub async fn record(
    store: &dyn AccountStore,
    q: RecordHistoryQuery,
) -> Result<GameHistoryRecord, ServiceError> {
    if let Some(user_id) = q.user_id.as_deref() {
        debug!(%user_id, "ignoring user_id parameter");
    }
    let row = store
        .insert_history(new_history(q))
        .await
        .map_err(ServiceError::storage(Operation::RecordHistory))?;
    info!(history_id = row.id, username = ?row.username, "game history recorded");
    Ok(row)
}

pub async fn list(
    store: &dyn AccountStore,
    username: Option<&str>,
) -> Result<Vec<GameHistoryItem>, ServiceError> {
    let rows = store
        .list_history_by_username(username)
        .await
        .map_err(ServiceError::storage(Operation::GetHistory))?;
    debug!(count = rows.len(), "game history loaded");
    Ok(rows.into_iter().map(GameHistoryItem::from).collect())
}
