use sqlx::FromRow;

/// Registered account row.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,          // serial surrogate key
    pub username: String, // unique
    pub password: String, // stored as received
}

/// Game history row. No column is validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct GameHistoryRecord {
    pub id: i32,
    pub username: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub score: Option<String>,
    pub duration: Option<String>,
}

/// Values for a history insert; the id is assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGameHistory {
    pub username: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub score: Option<String>,
    pub duration: String,
}
