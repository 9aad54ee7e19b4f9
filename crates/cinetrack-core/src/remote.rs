use async_trait::async_trait;
use cinetrack_models::{ListKind, Movie};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote list service unavailable: {0}")]
    Unavailable(String),
}

/// Membership state after a toggle, as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub present: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListStatus {
    pub in_watch_list: bool,
    pub is_favorite: bool,
}

/// Server-side view of the named lists.
#[async_trait]
pub trait RemoteList: Send + Sync {
    /// Flips membership and reports the state after the toggle.
    async fn toggle(&self, kind: ListKind, movie: &Movie) -> Result<ToggleOutcome, RemoteError>;

    /// Point lookup across both lists.
    async fn status(&self, movie_id: u64) -> Result<ListStatus, RemoteError>;

    async fn entries(&self, kind: ListKind) -> Result<Vec<Movie>, RemoteError>;
}

/// In-memory stand-in for server-side persistence. All clones share one
/// underlying map, so the state lives for the process, is shared by
/// every caller, and is never persisted across restarts. It is
/// deliberately not per-user. Construct separate instances to isolate
/// tests.
#[derive(Clone, Default)]
pub struct MemoryListService {
    lists: Arc<Mutex<HashMap<ListKind, HashMap<u64, Movie>>>>,
}

impl MemoryListService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RemoteList for MemoryListService {
    async fn toggle(&self, kind: ListKind, movie: &Movie) -> Result<ToggleOutcome, RemoteError> {
        let mut lists = self.lists.lock().await;
        let list = lists.entry(kind).or_default();

        let present = if list.remove(&movie.id).is_some() {
            false
        } else {
            list.insert(movie.id, movie.clone());
            true
        };

        Ok(ToggleOutcome { present })
    }

    async fn status(&self, movie_id: u64) -> Result<ListStatus, RemoteError> {
        let lists = self.lists.lock().await;
        let contains = |kind: ListKind| {
            lists
                .get(&kind)
                .map(|list| list.contains_key(&movie_id))
                .unwrap_or(false)
        };

        Ok(ListStatus {
            in_watch_list: contains(ListKind::Watchlist),
            is_favorite: contains(ListKind::Favorites),
        })
    }

    async fn entries(&self, kind: ListKind) -> Result<Vec<Movie>, RemoteError> {
        let lists = self.lists.lock().await;
        Ok(lists
            .get(&kind)
            .map(|list| list.values().cloned().collect())
            .unwrap_or_default())
    }
}
