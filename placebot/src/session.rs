//! Per-user session store: user id → (conversation state, session). Entries are created lazily and
//! live for the process lifetime.
//!
//! A turn holds the user's [`TurnGuard`] from load to the last store, so two turns of the same user
//! never interleave, even when they arrive from different chats.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::conversation::ConvState;

/// What the bot remembers about one user: the last selected category type code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub selected_category: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct Entry {
    state: ConvState,
    session: Session,
}

/// Exclusive right to run one turn for a user; released on drop.
pub type TurnGuard = OwnedMutexGuard<()>;

/// In-memory mapping from user id to conversation state and session.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: RwLock<HashMap<i64, Entry>>,
    turns: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other turn of `user_id` is running and returns the guard for this one.
    pub async fn begin_turn(&self, user_id: i64) -> TurnGuard {
        let lock = {
            let mut turns = self.turns.lock().await;
            turns.entry(user_id).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Current state and session; `Idle` with an empty session for users not seen yet.
    pub async fn load(&self, user_id: i64) -> (ConvState, Session) {
        let entries = self.entries.read().await;
        entries
            .get(&user_id)
            .map(|e| (e.state.clone(), e.session.clone()))
            .unwrap_or_default()
    }

    /// Replaces the user's state and session.
    pub async fn store(&self, user_id: i64, state: ConvState, session: Session) {
        self.entries
            .write()
            .await
            .insert(user_id, Entry { state, session });
    }

    /// Session of a known user.
    pub async fn session(&self, user_id: i64) -> Option<Session> {
        self.entries
            .read()
            .await
            .get(&user_id)
            .map(|e| e.session.clone())
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unknown_user_is_idle_with_empty_session() {
        let store = SessionStore::new();
        let (state, session) = store.load(1).await;
        assert_eq!(state, ConvState::Idle);
        assert_eq!(session.selected_category, None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_overwrites_and_isolates_users() {
        let store = SessionStore::new();
        let park = Session {
            selected_category: Some("park".to_string()),
        };
        let gym = Session {
            selected_category: Some("gym".to_string()),
        };

        store.store(1, ConvState::AwaitingLocation, park.clone()).await;
        store.store(2, ConvState::AwaitingLocation, park).await;
        store.store(1, ConvState::AwaitingLocation, gym.clone()).await;

        assert_eq!(store.session(1).await, Some(gym));
        assert_eq!(
            store.session(2).await.unwrap().selected_category.as_deref(),
            Some("park")
        );
        assert_eq!(store.session(3).await, None);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_turns_of_one_user_are_exclusive() {
        let store = Arc::new(SessionStore::new());
        let first = store.begin_turn(1).await;

        let other_user = tokio::time::timeout(Duration::from_millis(50), store.begin_turn(2)).await;
        assert!(other_user.is_ok());

        let waiting = {
            let store = store.clone();
            tokio::spawn(async move {
                let _guard = store.begin_turn(1).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiting.is_finished());

        drop(first);
        tokio::time::timeout(Duration::from_secs(1), waiting)
            .await
            .unwrap()
            .unwrap();
    }
}
