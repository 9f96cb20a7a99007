//! Fan-out/fan-in aggregation across the per-kind backends.

use std::sync::Arc;

use futures::future;

use campushub_auth::Principal;

use crate::backend::SearchBackend;
use crate::query::SearchQuery;
use crate::rank::merge_rank;
use crate::result::SearchResult;

/// Federated search over N independent per-kind backends.
///
/// All lookups for one call are issued concurrently, bounding total latency
/// by the slowest single kind. The merge step is a barrier: it waits for
/// every dispatched lookup to settle before producing output — no streaming
/// of early results.
pub struct FederatedSearch {
    backends: Vec<Arc<dyn SearchBackend>>,
}

impl FederatedSearch {
    pub fn new(backends: Vec<Arc<dyn SearchBackend>>) -> Self {
        Self { backends }
    }

    /// Run one federated search.
    ///
    /// An empty query short-circuits to an empty list without dispatching any
    /// backend. A failing backend contributes zero results and never aborts
    /// the others — partial backend failure degrades completeness, never
    /// availability, which is why this returns a plain `Vec` and not a
    /// `Result`.
    pub async fn search(
        &self,
        query: &SearchQuery,
        principal: Option<&Principal>,
    ) -> Vec<SearchResult> {
        if query.is_empty() {
            return Vec::new();
        }

        let lookups = self.backends.iter().map(|backend| {
            let backend = backend.clone();
            async move {
                match backend.search(query, principal).await {
                    Ok(results) => results,
                    Err(e) => {
                        tracing::warn!(
                            kind = %backend.kind(),
                            error = %e,
                            "search backend failed; contributing no results"
                        );
                        Vec::new()
                    }
                }
            }
        });

        let settled = future::join_all(lookups).await;
        merge_rank(settled, query)
    }
}
