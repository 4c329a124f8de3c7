use serde::Serialize;

use crate::{query::first_value, repo::GameHistoryRecord};

/// Stored in place of an absent start or end time.
pub const NOT_RECORDED: &str = "not recorded";

#[derive(Debug, Default)]
pub struct RecordHistoryQuery {
    /// Accepted for older clients; never stored.
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub score: Option<String>,
}

impl RecordHistoryQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            user_id: first_value(pairs, "user_id"),
            username: first_value(pairs, "username"),
            start_time: first_value(pairs, "start_time"),
            end_time: first_value(pairs, "end_time"),
            score: first_value(pairs, "score"),
        }
    }
}

#[derive(Debug)]
pub struct HistoryQuery {
    pub username: Option<String>,
}

impl HistoryQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            username: first_value(pairs, "username"),
        }
    }
}

/// One entry of the `/get_game_history` array.
#[derive(Debug, Serialize)]
pub struct GameHistoryItem {
    pub username: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub score: Option<String>,
    pub duration: String,
}

impl From<GameHistoryRecord> for GameHistoryItem {
    fn from(r: GameHistoryRecord) -> Self {
        Self {
            username: r.username,
            start_time: r.start_time,
            end_time: r.end_time,
            score: r.score,
            duration: r.duration.unwrap_or_default(),
        }
    }
}
