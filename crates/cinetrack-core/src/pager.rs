use cinetrack_models::{Movie, PageQuery};
use cinetrack_tmdb::{CatalogError, MovieCatalog};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, trace};

/// Derived view of the controller's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerStatus {
    /// No page fetched yet for the current signature.
    Idle,
    Fetching,
    Loaded,
    /// Every page of the result stream has been fetched.
    Exhausted,
}

struct PagerInner {
    query: PageQuery,
    generation: u64,
    next_page: u32,
    total_pages: Option<u32>,
    results: Vec<Movie>,
    fetching: bool,
}

impl PagerInner {
    fn reset(&mut self, query: PageQuery) {
        self.query = query;
        self.generation += 1;
        self.next_page = 1;
        self.total_pages = None;
        self.results.clear();
        self.fetching = false;
    }

    fn exhausted(&self) -> bool {
        matches!(self.total_pages, Some(total) if self.next_page > total)
    }
}

/// Incremental page fetcher for one query signature. `trigger` is the
/// visibility trigger: each call fetches at most one page, and calls
/// that land while a fetch is in flight or after the stream is
/// exhausted do nothing. Changing the signature resets the accumulated
/// results; a response still in flight for the old signature is
/// discarded when it arrives.
///
/// Clones share state, so one task can trigger fetches while another
/// reads results.
pub struct Pager<C> {
    catalog: Arc<C>,
    inner: Arc<Mutex<PagerInner>>,
}

impl<C> Clone for Pager<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: MovieCatalog> Pager<C> {
    pub fn new(catalog: Arc<C>, query: PageQuery) -> Self {
        Self {
            catalog,
            inner: Arc::new(Mutex::new(PagerInner {
                query,
                generation: 0,
                next_page: 1,
                total_pages: None,
                results: Vec::new(),
                fetching: false,
            })),
        }
    }

    /// Switches to a new query signature, discarding the old stream.
    /// A no-op when the signature is unchanged.
    pub async fn set_query(&self, query: PageQuery) {
        let mut inner = self.inner.lock().await;
        if inner.query == query {
            return;
        }
        debug!("query signature changed, resetting result stream");
        inner.reset(query);
    }

    /// Fetches the next page unless one is already in flight or the
    /// stream is exhausted. Returns whether new results were merged.
    pub async fn trigger(&self) -> Result<bool, CatalogError> {
        let (generation, query, page) = {
            let mut inner = self.inner.lock().await;
            if inner.fetching {
                trace!("fetch already in flight, ignoring trigger");
                return Ok(false);
            }
            if inner.exhausted() {
                trace!("result stream exhausted, ignoring trigger");
                return Ok(false);
            }
            inner.fetching = true;
            (inner.generation, inner.query.clone(), inner.next_page)
        };

        // Lock released across the fetch; only set_query can touch the
        // state meanwhile, and the generation check below handles that
        let outcome = self.catalog.fetch_page(&query, page).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(page, "discarding stale page for superseded query");
            return Ok(false);
        }
        inner.fetching = false;

        let fetched = outcome?;
        if page == 1 {
            inner.results = fetched.results;
        } else {
            inner.results.extend(fetched.results);
        }
        inner.total_pages = Some(fetched.total_pages);
        inner.next_page = page + 1;
        debug!(
            page,
            total = fetched.total_pages,
            accumulated = inner.results.len(),
            "merged result page"
        );
        Ok(true)
    }

    pub async fn results(&self) -> Vec<Movie> {
        self.inner.lock().await.results.clone()
    }

    pub async fn status(&self) -> PagerStatus {
        let inner = self.inner.lock().await;
        if inner.fetching {
            PagerStatus::Fetching
        } else if inner.exhausted() {
            PagerStatus::Exhausted
        } else if inner.total_pages.is_some() {
            PagerStatus::Loaded
        } else {
            PagerStatus::Idle
        }
    }

    /// Pages merged so far for the current signature.
    pub async fn pages_loaded(&self) -> u32 {
        self.inner.lock().await.next_page - 1
    }

    pub async fn total_pages(&self) -> Option<u32> {
        self.inner.lock().await.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cinetrack_models::MoviePage;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Serves a fixed three-page stream and counts fetches.
    struct ScriptedCatalog {
        total_pages: u32,
        fail_page: Option<u32>,
        fetches: AtomicUsize,
    }

    impl ScriptedCatalog {
        fn new(total_pages: u32) -> Self {
            Self {
                total_pages,
                fail_page: None,
                fetches: AtomicUsize::new(0),
            }
        }

        fn failing_at(total_pages: u32, fail_page: u32) -> Self {
            Self {
                fail_page: Some(fail_page),
                ..Self::new(total_pages)
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MovieCatalog for ScriptedCatalog {
        async fn fetch_page(&self, _query: &PageQuery, page: u32) -> Result<MoviePage, CatalogError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_page == Some(page) {
                return Err(CatalogError::Api {
                    status: 500,
                    message: "upstream error".to_string(),
                });
            }
            Ok(MoviePage {
                page,
                results: vec![
                    Movie::new(u64::from(page) * 10, format!("p{}a", page)),
                    Movie::new(u64::from(page) * 10 + 1, format!("p{}b", page)),
                ],
                total_pages: self.total_pages,
                total_results: u64::from(self.total_pages) * 2,
            })
        }
    }

    /// Holds every fetch until released, so tests can change the query
    /// while a page is in flight.
    struct GatedCatalog {
        started: Notify,
        release: Notify,
    }

    impl GatedCatalog {
        fn new() -> Self {
            Self {
                started: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl MovieCatalog for GatedCatalog {
        async fn fetch_page(&self, query: &PageQuery, page: u32) -> Result<MoviePage, CatalogError> {
            self.started.notify_one();
            self.release.notified().await;
            let label = match query {
                PageQuery::Search { query } => query.clone(),
                _ => "other".to_string(),
            };
            Ok(MoviePage {
                page,
                results: vec![Movie::new(u64::from(page), label)],
                total_pages: 3,
                total_results: 3,
            })
        }
    }

    fn search(q: &str) -> PageQuery {
        PageQuery::Search {
            query: q.to_string(),
        }
    }

    #[tokio::test]
    async fn test_three_triggers_accumulate_in_order_then_exhaust() {
        let catalog = Arc::new(ScriptedCatalog::new(3));
        let pager = Pager::new(catalog.clone(), PageQuery::Popular);

        assert_eq!(pager.status().await, PagerStatus::Idle);

        assert!(pager.trigger().await.unwrap());
        assert!(pager.trigger().await.unwrap());
        assert!(pager.trigger().await.unwrap());

        let titles: Vec<String> = pager.results().await.iter().map(|m| m.title.clone()).collect();
        assert_eq!(titles, vec!["p1a", "p1b", "p2a", "p2b", "p3a", "p3b"]);
        assert_eq!(pager.status().await, PagerStatus::Exhausted);

        // A fourth trigger performs no fetch
        assert!(!pager.trigger().await.unwrap());
        assert_eq!(catalog.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_single_page_stream_exhausts_immediately() {
        let catalog = Arc::new(ScriptedCatalog::new(1));
        let pager = Pager::new(catalog, PageQuery::Popular);

        assert!(pager.trigger().await.unwrap());
        assert_eq!(pager.status().await, PagerStatus::Exhausted);
        assert_eq!(pager.pages_loaded().await, 1);
    }

    #[tokio::test]
    async fn test_failed_page_retains_prior_results() {
        let catalog = Arc::new(ScriptedCatalog::failing_at(3, 2));
        let pager = Pager::new(catalog.clone(), PageQuery::Popular);

        assert!(pager.trigger().await.unwrap());
        assert!(pager.trigger().await.is_err());

        assert_eq!(pager.results().await.len(), 2);
        assert_eq!(pager.pages_loaded().await, 1);
        // No auto-retry happened underneath
        assert_eq!(catalog.fetch_count(), 2);
        // The single-flight guard cleared, so the caller may retry
        assert_eq!(pager.status().await, PagerStatus::Loaded);
    }

    #[tokio::test]
    async fn test_trigger_ignored_while_fetch_in_flight() {
        let catalog = Arc::new(GatedCatalog::new());
        let pager = Pager::new(catalog.clone(), search("q1"));

        let background = pager.clone();
        let handle = tokio::spawn(async move { background.trigger().await });
        catalog.started.notified().await;

        assert_eq!(pager.status().await, PagerStatus::Fetching);
        assert!(!pager.trigger().await.unwrap());

        catalog.release.notify_one();
        assert!(handle.await.unwrap().unwrap());
        assert_eq!(pager.results().await.len(), 1);
    }

    #[tokio::test]
    async fn test_query_change_discards_stale_response() {
        let catalog = Arc::new(GatedCatalog::new());
        let pager = Pager::new(catalog.clone(), search("q1"));

        let background = pager.clone();
        let handle = tokio::spawn(async move { background.trigger().await });
        catalog.started.notified().await;

        // Signature changes while page 1 of q1 is in flight
        pager.set_query(search("q2")).await;
        catalog.release.notify_one();

        assert!(!handle.await.unwrap().unwrap());
        assert!(pager.results().await.is_empty());
        assert_eq!(pager.status().await, PagerStatus::Idle);

        // The new signature fetches cleanly
        catalog.release.notify_one();
        assert!(pager.trigger().await.unwrap());
        let results = pager.results().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "q2");
    }

    #[tokio::test]
    async fn test_set_query_same_signature_keeps_results() {
        let catalog = Arc::new(ScriptedCatalog::new(3));
        let pager = Pager::new(catalog, search("dune"));

        pager.trigger().await.unwrap();
        pager.set_query(search("dune")).await;

        assert_eq!(pager.results().await.len(), 2);
        assert_eq!(pager.status().await, PagerStatus::Loaded);
    }

    #[tokio::test]
    async fn test_query_change_resets_accumulated_results() {
        let catalog = Arc::new(ScriptedCatalog::new(3));
        let pager = Pager::new(catalog, search("dune"));

        pager.trigger().await.unwrap();
        pager.trigger().await.unwrap();
        assert_eq!(pager.results().await.len(), 4);

        pager.set_query(search("arrival")).await;
        assert!(pager.results().await.is_empty());
        assert_eq!(pager.status().await, PagerStatus::Idle);

        pager.trigger().await.unwrap();
        assert_eq!(pager.results().await.len(), 2);
        assert_eq!(pager.pages_loaded().await, 1);
    }

    #[tokio::test]
    async fn test_empty_stream_is_exhausted_after_first_page() {
        let catalog = Arc::new(ScriptedCatalog::new(0));
        let pager = Pager::new(catalog, PageQuery::Popular);

        // total_pages = 0: the first response already ends the stream
        assert!(pager.trigger().await.unwrap());
        assert_eq!(pager.status().await, PagerStatus::Exhausted);
        assert!(!pager.trigger().await.unwrap());
    }
}
