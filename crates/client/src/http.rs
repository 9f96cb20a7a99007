//! HTTP transport: one [`SearchBackend`] per server-side `/search` endpoint.
//!
//! The server returns kind-native field names in `{ "data": [...] }`;
//! normalization into [`SearchResult`] happens here, on the client side of
//! the boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use campushub_auth::Principal;
use campushub_core::{PrincipalId, ResourceId};
use campushub_search::{SearchBackend, SearchError, SearchKind, SearchQuery, SearchResult};

/// An explicit, injected credential holder.
///
/// Every network call site receives the session rather than reading a token
/// out of ambient storage; the owner of the `Session` is responsible for
/// refreshing or discarding it.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// One per-kind search endpoint client.
pub struct HttpKindBackend {
    client: reqwest::Client,
    base_url: String,
    session: Session,
    kind: SearchKind,
}

impl HttpKindBackend {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        session: Session,
        kind: SearchKind,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            session,
            kind,
        }
    }

    fn endpoint(&self) -> String {
        let path = match self.kind {
            SearchKind::Event => "events",
            SearchKind::Project => "projects",
            SearchKind::Forum => "forum",
            SearchKind::Team => "teams",
            SearchKind::ClassGroup => "classgroups",
            SearchKind::User => "users",
        };
        format!("{}/{}/search", self.base_url, path)
    }
}

#[async_trait]
impl SearchBackend for HttpKindBackend {
    fn kind(&self) -> SearchKind {
        self.kind
    }

    async fn search(
        &self,
        query: &SearchQuery,
        _principal: Option<&Principal>,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("q", query.raw.as_str())])
            .bearer_auth(self.session.token())
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::backend(
                self.kind,
                format!("status {}", response.status()),
            ));
        }

        let envelope: DataEnvelope = response
            .json()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        envelope
            .data
            .into_iter()
            .map(|doc| normalize(self.kind, doc))
            .collect()
    }
}

/// The five concurrent fan-out targets for one API server.
pub fn http_backends(
    base_url: &str,
    session: &Session,
) -> Vec<std::sync::Arc<dyn SearchBackend>> {
    let client = reqwest::Client::new();
    [
        SearchKind::Event,
        SearchKind::Project,
        SearchKind::Forum,
        SearchKind::Team,
        SearchKind::ClassGroup,
    ]
    .into_iter()
    .map(|kind| {
        std::sync::Arc::new(HttpKindBackend::new(
            client.clone(),
            base_url,
            session.clone(),
            kind,
        )) as std::sync::Arc<dyn SearchBackend>
    })
    .collect()
}

// ── Wire shapes ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DataEnvelope {
    data: Vec<serde_json::Value>,
}

/// Fields shared by every kind's native record, under whichever names that
/// kind uses.
#[derive(Debug, Deserialize)]
struct KindDoc {
    id: ResourceId,
    #[serde(alias = "name")]
    title: String,
    #[serde(alias = "content")]
    description: String,
    category: Option<String>,
    course_code: Option<String>,
    author: Option<PrincipalId>,
    #[serde(alias = "posted_at", alias = "created_at")]
    starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    tags: Vec<String>,
}

fn normalize(kind: SearchKind, value: serde_json::Value) -> Result<SearchResult, SearchError> {
    let doc: KindDoc = serde_json::from_value(value)
        .map_err(|e| SearchError::backend(kind, format!("malformed record: {e}")))?;

    let url_path = match kind {
        SearchKind::Event => "events",
        SearchKind::Project => "projects",
        SearchKind::Forum => "forum",
        SearchKind::Team => "teams",
        SearchKind::ClassGroup => "classgroups",
        SearchKind::User => "users",
    };

    Ok(SearchResult {
        id: doc.id,
        kind,
        title: doc.title,
        description: doc.description,
        url: format!("/{}/{}", url_path, doc.id),
        category: doc.category.or(doc.course_code),
        author: doc.author.map(|a| a.to_string()),
        timestamp: doc.starts_at,
        tags: doc.tags,
    })
}
