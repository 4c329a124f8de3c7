use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;

use super::{AccountStore, GameHistoryRecord, NewGameHistory, StoreError, User};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    history: Vec<GameHistoryRecord>,
    next_user_id: i32,
    next_history_id: i32,
}

/// In-process store with the same contract as the Postgres one.
#[derive(Default)]
pub struct MemoryAccountStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `StoreError::Unavailable` while set.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn user_count(&self, username: &str) -> usize {
        self.lock()
            .map(|t| t.users.iter().filter(|u| u.username == username).count())
            .unwrap_or(0)
    }

    pub fn history_len(&self) -> usize {
        self.lock().map(|t| t.history.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Tables>, StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store switched to failing".into()));
        }
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".into()))
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert_user(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let mut tables = self.lock()?;
        if tables.users.iter().any(|u| u.username == username) {
            return Err(StoreError::Duplicate);
        }
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            username: username.to_string(),
            password: password.to_string(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let tables = self.lock()?;
        Ok(tables
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }

    async fn insert_history(
        &self,
        record: NewGameHistory,
    ) -> Result<GameHistoryRecord, StoreError> {
        let mut tables = self.lock()?;
        tables.next_history_id += 1;
        let row = GameHistoryRecord {
            id: tables.next_history_id,
            username: record.username,
            start_time: record.start_time,
            end_time: record.end_time,
            score: record.score,
            duration: Some(record.duration),
        };
        tables.history.push(row.clone());
        Ok(row)
    }

    async fn list_history_by_username(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<GameHistoryRecord>, StoreError> {
        let tables = self.lock()?;
        Ok(tables
            .history
            .iter()
            .filter(|r| r.username.as_deref() == username)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_user_keeps_first_password() {
        let store = MemoryAccountStore::new();
        store.insert_user("alice", "one").await.unwrap();
        let err = store.insert_user("alice", "two").await.unwrap_err();

        assert!(matches!(err, StoreError::Duplicate));
        assert_eq!(store.user_count("alice"), 1);
        assert!(store
            .find_user_by_credentials("alice", "one")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn ids_are_assigned_in_sequence() {
        let store = MemoryAccountStore::new();
        let a = store.insert_user("a", "p").await.unwrap();
        let b = store.insert_user("b", "p").await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn failing_mode_surfaces_unavailable() {
        let store = MemoryAccountStore::new();
        store.set_failing(true);
        let err = store.list_history_by_username(Some("x")).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));

        store.set_failing(false);
        assert!(store.list_history_by_username(Some("x")).await.unwrap().is_empty());
    }
}
