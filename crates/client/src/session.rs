//! Debounced, last-query-wins search session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use campushub_search::{FederatedSearch, SearchQuery, SearchResult};

/// Default input quiescence window before a search is dispatched.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// A live search box session.
///
/// Each call to [`SearchSession::input`] bumps a monotone revision. A search
/// is dispatched only once the input has been quiet for the debounce window,
/// and a settling response is applied only while its revision is still the
/// latest — an older, slower response never overwrites a newer query's
/// results. Cancellation is cooperative result-discard; in-flight lookups are
/// never aborted.
pub struct SearchSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    search: Arc<FederatedSearch>,
    quiescence: Duration,
    revision: AtomicU64,
    dispatched: AtomicU64,
    results: RwLock<Vec<SearchResult>>,
}

impl SearchSession {
    pub fn new(search: Arc<FederatedSearch>) -> Self {
        Self::with_quiescence(search, DEBOUNCE)
    }

    pub fn with_quiescence(search: Arc<FederatedSearch>, quiescence: Duration) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                search,
                quiescence,
                revision: AtomicU64::new(0),
                dispatched: AtomicU64::new(0),
                results: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Feed the current input text.
    ///
    /// Must be called from within a tokio runtime.
    pub fn input(&self, text: &str) {
        let revision = self.inner.revision.fetch_add(1, Ordering::SeqCst) + 1;
        let query = SearchQuery::new(text);
        let inner = self.inner.clone();

        tokio::spawn(async move {
            tokio::time::sleep(inner.quiescence).await;

            // Superseded during the quiescence window: never dispatched.
            if inner.revision.load(Ordering::SeqCst) != revision {
                return;
            }

            inner.dispatched.fetch_add(1, Ordering::SeqCst);
            let results = inner.search.search(&query, None).await;

            // Last-query-wins: apply only while still the latest revision.
            if inner.revision.load(Ordering::SeqCst) != revision {
                tracing::debug!(query = %query.raw, "discarding stale search response");
                return;
            }

            if let Ok(mut current) = inner.results.write() {
                *current = results;
            }
        });
    }

    /// The most recently applied result set.
    pub fn results(&self) -> Vec<SearchResult> {
        self.inner
            .results
            .read()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// How many searches have actually been dispatched (post-debounce).
    pub fn dispatched(&self) -> u64 {
        self.inner.dispatched.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use campushub_auth::Principal;
    use campushub_core::ResourceId;
    use campushub_search::{SearchBackend, SearchError, SearchKind};

    /// Echoes the query back as a single result; "a" is artificially slow.
    struct EchoBackend;

    #[async_trait]
    impl SearchBackend for EchoBackend {
        fn kind(&self) -> SearchKind {
            SearchKind::Event
        }

        async fn search(
            &self,
            query: &SearchQuery,
            _principal: Option<&Principal>,
        ) -> Result<Vec<SearchResult>, SearchError> {
            if query.normalized == "a" {
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
            Ok(vec![SearchResult {
                id: ResourceId::new(),
                kind: SearchKind::Event,
                title: query.raw.clone(),
                description: String::new(),
                url: String::new(),
                category: None,
                author: None,
                timestamp: None,
                tags: vec![],
            }])
        }
    }

    fn session() -> SearchSession {
        let federated = Arc::new(FederatedSearch::new(vec![Arc::new(EchoBackend)]));
        SearchSession::new(federated)
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_input_coalesces_to_one_dispatch() {
        let s = session();

        s.input("a");
        tokio::time::sleep(Duration::from_millis(100)).await;
        s.input("ab");
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(s.dispatched(), 1);
        let titles: Vec<String> = s.results().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["ab".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_response_never_overwrites_newer_results() {
        let s = session();

        // "a" survives its quiescence window and dispatches, but its lookup
        // is slow.
        s.input("a");
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(s.dispatched(), 1);

        // "ab" dispatches and settles first.
        s.input("ab");
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(s.dispatched(), 2);
        let titles: Vec<String> = s.results().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["ab".to_string()]);

        // "a"'s response finally settles and must be discarded.
        tokio::time::sleep(Duration::from_millis(600)).await;
        let titles: Vec<String> = s.results().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["ab".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_input_dispatches_each_query() {
        let s = session();

        s.input("chess");
        tokio::time::sleep(Duration::from_millis(400)).await;
        s.input("robotics");
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(s.dispatched(), 2);
        let titles: Vec<String> = s.results().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["robotics".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_input_clears_results_without_backend_dispatch() {
        let s = session();

        s.input("robotics");
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(s.results().len(), 1);

        s.input("   ");
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(s.results().is_empty());
    }
}
