//! In-process [`SearchBackend`] adapters over the document store.

use std::sync::Arc;

use async_trait::async_trait;

use campushub_auth::Principal;
use campushub_search::{SearchBackend, SearchError, SearchKind, SearchQuery, SearchResult};

use crate::normalize;
use crate::store::InMemoryStore;

/// One per-kind fan-out target backed by the in-memory store.
pub struct StoreSearchBackend {
    store: Arc<InMemoryStore>,
    kind: SearchKind,
}

impl StoreSearchBackend {
    pub fn new(store: Arc<InMemoryStore>, kind: SearchKind) -> Self {
        Self { store, kind }
    }
}

#[async_trait]
impl SearchBackend for StoreSearchBackend {
    fn kind(&self) -> SearchKind {
        self.kind
    }

    async fn search(
        &self,
        query: &SearchQuery,
        principal: Option<&Principal>,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let needle = query.normalized.as_str();
        let results = match self.kind {
            SearchKind::Event => self
                .store
                .search_events(needle)
                .iter()
                .map(normalize::normalize_event)
                .collect(),
            SearchKind::Forum => self
                .store
                .search_posts(needle)
                .iter()
                .map(normalize::normalize_post)
                .collect(),
            SearchKind::Project => self
                .store
                .search_projects(needle)
                .iter()
                .map(normalize::normalize_project)
                .collect(),
            SearchKind::Team => self
                .store
                .search_teams(needle)
                .iter()
                .map(normalize::normalize_team)
                .collect(),
            SearchKind::ClassGroup => self
                .store
                .search_class_groups(needle, principal.map(|p| p.id))
                .iter()
                .map(normalize::normalize_class_group)
                .collect(),
            SearchKind::User => {
                return Err(SearchError::backend(self.kind, "users are not a fan-out target"));
            }
        };
        Ok(results)
    }
}

/// The five per-kind backends the federated search fans out to.
pub fn community_backends(store: &Arc<InMemoryStore>) -> Vec<Arc<dyn SearchBackend>> {
    [
        SearchKind::Event,
        SearchKind::Project,
        SearchKind::Forum,
        SearchKind::Team,
        SearchKind::ClassGroup,
    ]
    .into_iter()
    .map(|kind| Arc::new(StoreSearchBackend::new(store.clone(), kind)) as Arc<dyn SearchBackend>)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_auth::Role;
    use campushub_community::{ClassGroup, CommunityEvent};
    use campushub_core::{PrincipalId, ResourceId};
    use campushub_search::FederatedSearch;
    use chrono::Utc;

    #[tokio::test]
    async fn federated_search_over_store_backends() {
        let store = Arc::new(InMemoryStore::new());
        let viewer = PrincipalId::new();

        store.insert_event(CommunityEvent {
            id: ResourceId::new(),
            title: "Robotics Demo".to_string(),
            description: "annual showcase".to_string(),
            location: None,
            category: None,
            starts_at: Utc::now(),
            owner: PrincipalId::new(),
            tags: vec![],
        });
        store.insert_class_group(ClassGroup {
            id: ResourceId::new(),
            name: "Robotics 301".to_string(),
            description: "advanced".to_string(),
            course_code: None,
            leader: PrincipalId::new(),
            enrolled: vec![viewer],
            created_at: Utc::now(),
        });

        let federated = FederatedSearch::new(community_backends(&store));
        let principal = Principal::new(viewer, Role::Student, true);

        let results = federated
            .search(&SearchQuery::new("robotics"), Some(&principal))
            .await;
        assert_eq!(results.len(), 2);

        // Anonymous callers never see class groups.
        let anonymous = federated.search(&SearchQuery::new("robotics"), None).await;
        assert_eq!(anonymous.len(), 1);
        assert_eq!(anonymous[0].kind, SearchKind::Event);
    }
}
