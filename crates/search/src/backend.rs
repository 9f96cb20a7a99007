use async_trait::async_trait;

use campushub_auth::Principal;

use crate::error::SearchError;
use crate::query::SearchQuery;
use crate::result::{SearchKind, SearchResult};

/// One per-kind lookup target of the federated fan-out.
///
/// Each backend is a thin filtered query against a single collection:
/// case-insensitive substring match over the kind's searchable fields,
/// restricted to records the principal is permitted to see. Backends must
/// not mutate shared state; lookups for one search run concurrently.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    fn kind(&self) -> SearchKind;

    async fn search(
        &self,
        query: &SearchQuery,
        principal: Option<&Principal>,
    ) -> Result<Vec<SearchResult>, SearchError>;
}
