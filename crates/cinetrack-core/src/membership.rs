use cinetrack_models::{ListKind, Movie};
use std::sync::Arc;
use tracing::warn;

use crate::notify::{ListEvent, Notifier};
use crate::remote::RemoteList;
use crate::store::ListStore;

/// Tracks one movie's membership in one named list, keeping the
/// in-memory flag, the persisted list, and (optionally) a remote list
/// service in sync.
///
/// Toggles are optimistic: the flag flips before anything is persisted,
/// and the store write is best-effort. When a remote service is
/// attached, its response overwrites the optimistic flag (the server
/// wins on reconciliation).
///
/// Two trackers on the same list key race read-mutate-write; the last
/// write wins. Single-tab, single-user, best-effort persistence is the
/// intended scope.
pub struct ListMembership {
    kind: ListKind,
    movie: Movie,
    present: bool,
    store: ListStore,
    notifier: Notifier,
    remote: Option<Arc<dyn RemoteList>>,
}

impl ListMembership {
    /// Hydrates the membership flag from the persisted list.
    pub fn new(kind: ListKind, movie: Movie, store: ListStore, notifier: Notifier) -> Self {
        let present = store
            .read(kind.storage_key())
            .iter()
            .any(|m| m.id == movie.id);

        Self {
            kind,
            movie,
            present,
            store,
            notifier,
            remote: None,
        }
    }

    pub fn with_remote(mut self, remote: Arc<dyn RemoteList>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn present(&self) -> bool {
        self.present
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    /// Retargets the tracker. Membership is recomputed only when the id
    /// actually changes.
    pub fn set_movie(&mut self, movie: Movie) {
        if movie.id != self.movie.id {
            self.present = self
                .store
                .read(self.kind.storage_key())
                .iter()
                .any(|m| m.id == movie.id);
        }
        self.movie = movie;
    }

    /// Flips membership and returns the resulting state.
    pub async fn toggle(&mut self) -> bool {
        // Optimistic: the flag flips before persistence or network
        self.present = !self.present;

        let key = self.kind.storage_key();
        let mut list = self.store.read(key);
        if self.present {
            // A duplicate add leaves the list untouched; the flag
            // already flipped above
            if !list.iter().any(|m| m.id == self.movie.id) {
                list.push(self.movie.clone());
            }
        } else {
            list.retain(|m| m.id != self.movie.id);
        }
        if let Err(e) = self.store.write(key, &list) {
            warn!("Best-effort persist of {} failed: {}", key, e);
        }

        let event = if self.present {
            ListEvent::Added {
                title: self.movie.title.clone(),
                list: self.kind.label(),
            }
        } else {
            ListEvent::Removed {
                title: self.movie.title.clone(),
                list: self.kind.label(),
            }
        };
        self.notifier.publish(event);

        if let Some(remote) = &self.remote {
            match remote.toggle(self.kind, &self.movie).await {
                // Server wins over the optimistic guess
                Ok(outcome) => self.present = outcome.present,
                Err(e) => warn!("Remote list sync failed for {}: {}", key, e),
            }
        }

        self.present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationSink;
    use crate::remote::MemoryListService;
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingSink {
        seen: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn messages(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl NotificationSink for RecordingSink {
        fn publish(&self, event: ListEvent) {
            self.seen.lock().unwrap().push(event.to_string());
        }
    }

    fn tracker(
        kind: ListKind,
        movie: Movie,
        store: &ListStore,
        sink: &Arc<RecordingSink>,
    ) -> ListMembership {
        let notifier = Notifier::immediate(sink.clone());
        ListMembership::new(kind, movie, store.clone(), notifier)
    }

    #[tokio::test]
    async fn test_toggle_favorites_scenario() {
        let dir = tempdir().unwrap();
        let store = ListStore::open(dir.path());
        let sink = Arc::new(RecordingSink::default());
        let mut membership = tracker(ListKind::Favorites, Movie::new(42, "Dune"), &store, &sink);

        assert!(!membership.present());

        assert!(membership.toggle().await);
        assert!(membership.present());
        assert_eq!(store.read("favoriteList").len(), 1);

        assert!(!membership.toggle().await);
        assert!(!membership.present());
        assert!(store.read("favoriteList").is_empty());

        assert_eq!(
            sink.messages(),
            vec!["Dune added to Favorites", "Dune removed from Favorites"]
        );
    }

    #[tokio::test]
    async fn test_toggle_parity() {
        let dir = tempdir().unwrap();
        let store = ListStore::open(dir.path());
        let sink = Arc::new(RecordingSink::default());
        let mut membership = tracker(ListKind::Watchlist, Movie::new(1, "A"), &store, &sink);

        for _ in 0..5 {
            membership.toggle().await;
        }
        assert!(membership.present());

        membership.toggle().await;
        assert!(!membership.present());
    }

    #[tokio::test]
    async fn test_hydrates_from_persisted_list() {
        let dir = tempdir().unwrap();
        let store = ListStore::open(dir.path());
        store
            .write("watchList", &[Movie::new(9, "Persisted")])
            .unwrap();

        let sink = Arc::new(RecordingSink::default());
        let membership = tracker(ListKind::Watchlist, Movie::new(9, "Persisted"), &store, &sink);
        assert!(membership.present());

        let other = tracker(ListKind::Watchlist, Movie::new(10, "Other"), &store, &sink);
        assert!(!other.present());
    }

    #[tokio::test]
    async fn test_duplicate_add_keeps_list_unique() {
        let dir = tempdir().unwrap();
        let store = ListStore::open(dir.path());
        // Another tracker already persisted the movie
        store.write("watchList", &[Movie::new(5, "Dup")]).unwrap();

        let sink = Arc::new(RecordingSink::default());
        let notifier = Notifier::immediate(sink.clone());
        let mut membership = ListMembership {
            kind: ListKind::Watchlist,
            movie: Movie::new(5, "Dup"),
            present: false, // stale hydration, simulating a racing tab
            store: store.clone(),
            notifier,
            remote: None,
        };

        membership.toggle().await;
        assert!(membership.present());

        let list = store.read("watchList");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 5);
    }

    #[tokio::test]
    async fn test_uniqueness_across_repeated_toggles() {
        let dir = tempdir().unwrap();
        let store = ListStore::open(dir.path());
        let sink = Arc::new(RecordingSink::default());

        let mut a = tracker(ListKind::Watchlist, Movie::new(1, "A"), &store, &sink);
        let mut b = tracker(ListKind::Watchlist, Movie::new(2, "B"), &store, &sink);

        a.toggle().await;
        b.toggle().await;
        a.toggle().await;
        a.toggle().await;

        let list = store.read("watchList");
        let mut ids: Vec<u64> = list.iter().map(|m| m.id).collect();
        let len_before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len_before);
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_set_movie_recomputes_membership() {
        let dir = tempdir().unwrap();
        let store = ListStore::open(dir.path());
        store.write("favoriteList", &[Movie::new(2, "B")]).unwrap();

        let sink = Arc::new(RecordingSink::default());
        let mut membership = tracker(ListKind::Favorites, Movie::new(1, "A"), &store, &sink);
        assert!(!membership.present());

        membership.set_movie(Movie::new(2, "B"));
        assert!(membership.present());
    }

    #[tokio::test]
    async fn test_remote_reconciliation_server_wins() {
        let dir = tempdir().unwrap();
        let store = ListStore::open(dir.path());
        let sink = Arc::new(RecordingSink::default());
        let remote = MemoryListService::new();

        // The server already holds the movie, the local store does not
        remote
            .toggle(ListKind::Watchlist, &Movie::new(3, "C"))
            .await
            .unwrap();

        let mut membership = tracker(ListKind::Watchlist, Movie::new(3, "C"), &store, &sink)
            .with_remote(Arc::new(remote.clone()));
        assert!(!membership.present());

        // Optimistic guess says present; the server toggles to absent
        // and its answer sticks
        let present = membership.toggle().await;
        assert!(!present);
        assert!(!membership.present());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_toggles_emit_single_notification() {
        let dir = tempdir().unwrap();
        let store = ListStore::open(dir.path());
        let sink = Arc::new(RecordingSink::default());
        let notifier = Notifier::new(
            sink.clone(),
            Duration::from_millis(200),
        );
        let mut membership =
            ListMembership::new(ListKind::Favorites, Movie::new(42, "Dune"), store, notifier);

        membership.toggle().await;
        membership.toggle().await;
        membership.toggle().await;
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(sink.messages(), vec!["Dune added to Favorites"]);
        assert!(membership.present());
    }

    #[tokio::test]
    async fn test_toggle_survives_unavailable_storage() {
        let dir = tempdir().unwrap();
        let blocked = dir.path().join("occupied");
        std::fs::write(&blocked, "x").unwrap();

        let store = ListStore::open(&blocked);
        let sink = Arc::new(RecordingSink::default());
        let mut membership = tracker(ListKind::Watchlist, Movie::new(1, "A"), &store, &sink);

        // Write fails underneath but the session state still flips
        assert!(membership.toggle().await);
        assert_eq!(sink.messages(), vec!["A added to Watchlist"]);
    }
}
