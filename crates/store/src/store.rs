use std::collections::HashMap;
use std::sync::RwLock;

use campushub_auth::{Principal, PrincipalSource};
use campushub_community::{ClassGroup, CommunityEvent, ForumPost, Project, Team, UserAccount};
use campushub_core::{PrincipalId, ResourceId};

/// In-memory document store: one collection per resource kind plus users.
///
/// Reads on a poisoned lock degrade to "nothing found" rather than
/// panicking, matching the availability-over-completeness posture of the
/// search path.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<PrincipalId, UserAccount>>,
    events: RwLock<HashMap<ResourceId, CommunityEvent>>,
    posts: RwLock<HashMap<ResourceId, ForumPost>>,
    projects: RwLock<HashMap<ResourceId, Project>>,
    teams: RwLock<HashMap<ResourceId, Team>>,
    class_groups: RwLock<HashMap<ResourceId, ClassGroup>>,
}

/// Case-insensitive substring match over a record's searchable fields.
/// `needle` must already be lowercased.
fn matches(needle: &str, fields: &[&str]) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(needle))
}

macro_rules! collection_methods {
    ($field:ident, $ty:ty, $insert:ident, $get:ident, $list:ident, $update:ident, $remove:ident) => {
        pub fn $insert(&self, record: $ty) {
            if let Ok(mut map) = self.$field.write() {
                map.insert(record.id, record);
            }
        }

        pub fn $get(&self, id: ResourceId) -> Option<$ty> {
            self.$field.read().ok()?.get(&id).cloned()
        }

        pub fn $list(&self) -> Vec<$ty> {
            let map = match self.$field.read() {
                Ok(m) => m,
                Err(_) => return vec![],
            };
            let mut all: Vec<$ty> = map.values().cloned().collect();
            all.sort_by_key(|r| *r.id.as_uuid());
            all
        }

        pub fn $update(&self, record: $ty) -> bool {
            match self.$field.write() {
                Ok(mut map) if map.contains_key(&record.id) => {
                    map.insert(record.id, record);
                    true
                }
                _ => false,
            }
        }

        pub fn $remove(&self, id: ResourceId) -> bool {
            match self.$field.write() {
                Ok(mut map) => map.remove(&id).is_some(),
                Err(_) => false,
            }
        }
    };
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    collection_methods!(events, CommunityEvent, insert_event, event, list_events, update_event, remove_event);
    collection_methods!(posts, ForumPost, insert_post, post, list_posts, update_post, remove_post);
    collection_methods!(projects, Project, insert_project, project, list_projects, update_project, remove_project);
    collection_methods!(teams, Team, insert_team, team, list_teams, update_team, remove_team);
    collection_methods!(class_groups, ClassGroup, insert_class_group, class_group, list_class_groups, update_class_group, remove_class_group);

    // ── Users ────────────────────────────────────────────────────────────

    pub fn insert_user(&self, user: UserAccount) {
        if let Ok(mut map) = self.users.write() {
            map.insert(user.id, user);
        }
    }

    pub fn user(&self, id: PrincipalId) -> Option<UserAccount> {
        self.users.read().ok()?.get(&id).cloned()
    }

    // ── Per-kind text search ─────────────────────────────────────────────
    //
    // `needle` must already be trimmed and lowercased.

    pub fn search_events(&self, needle: &str) -> Vec<CommunityEvent> {
        self.list_events()
            .into_iter()
            .filter(|e| matches(needle, &[&e.title, &e.description]))
            .collect()
    }

    pub fn search_posts(&self, needle: &str) -> Vec<ForumPost> {
        self.list_posts()
            .into_iter()
            .filter(|p| matches(needle, &[&p.title, &p.content]))
            .collect()
    }

    pub fn search_projects(&self, needle: &str) -> Vec<Project> {
        self.list_projects()
            .into_iter()
            .filter(|p| matches(needle, &[&p.name, &p.description]))
            .collect()
    }

    pub fn search_teams(&self, needle: &str) -> Vec<Team> {
        self.list_teams()
            .into_iter()
            .filter(|t| matches(needle, &[&t.name, &t.description]))
            .collect()
    }

    /// Class-group search is restricted to groups the viewer teaches or is
    /// enrolled in; an anonymous viewer sees none.
    pub fn search_class_groups(&self, needle: &str, viewer: Option<PrincipalId>) -> Vec<ClassGroup> {
        let Some(viewer) = viewer else {
            return vec![];
        };
        self.list_class_groups()
            .into_iter()
            .filter(|g| g.is_visible_to(viewer))
            .filter(|g| matches(needle, &[&g.name, &g.description]))
            .collect()
    }
}

impl PrincipalSource for InMemoryStore {
    fn find_principal(&self, id: PrincipalId) -> Option<Principal> {
        self.user(id).map(|u| u.to_principal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_auth::Role;
    use chrono::Utc;

    fn event(title: &str, description: &str) -> CommunityEvent {
        CommunityEvent {
            id: ResourceId::new(),
            title: title.to_string(),
            description: description.to_string(),
            location: None,
            category: None,
            starts_at: Utc::now(),
            owner: PrincipalId::new(),
            tags: vec![],
        }
    }

    #[test]
    fn search_matches_title_and_description_case_insensitively() {
        let store = InMemoryStore::new();
        store.insert_event(event("Robotics Demo", "annual showcase"));
        store.insert_event(event("Chess night", "casual ROBOTICS chat welcome"));
        store.insert_event(event("Bake sale", "cookies"));

        let hits = store.search_events("robotics");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn class_group_search_respects_visibility() {
        let store = InMemoryStore::new();
        let leader = PrincipalId::new();
        let member = PrincipalId::new();
        let outsider = PrincipalId::new();

        store.insert_class_group(ClassGroup {
            id: ResourceId::new(),
            name: "Robotics 301".to_string(),
            description: "Advanced robotics".to_string(),
            course_code: None,
            leader,
            enrolled: vec![member],
            created_at: Utc::now(),
        });

        assert_eq!(store.search_class_groups("robotics", Some(leader)).len(), 1);
        assert_eq!(store.search_class_groups("robotics", Some(member)).len(), 1);
        assert!(store.search_class_groups("robotics", Some(outsider)).is_empty());
        assert!(store.search_class_groups("robotics", None).is_empty());
    }

    #[test]
    fn principal_source_strips_secrets_and_reflects_activation() {
        let store = InMemoryStore::new();
        let id = PrincipalId::new();
        store.insert_user(UserAccount {
            id,
            email: "t@campus.edu".to_string(),
            display_name: "T".to_string(),
            role: Role::Faculty,
            is_active: false,
            password_hash: "hash".to_string(),
        });

        let principal = store.find_principal(id).unwrap();
        assert_eq!(principal.role, Role::Faculty);
        assert!(!principal.is_active);
        assert!(store.find_principal(PrincipalId::new()).is_none());
    }

    #[test]
    fn update_and_remove_round_trip() {
        let store = InMemoryStore::new();
        let mut e = event("Robotics", "demo");
        store.insert_event(e.clone());

        e.description = "rescheduled".to_string();
        assert!(store.update_event(e.clone()));
        assert_eq!(store.event(e.id).unwrap().description, "rescheduled");

        assert!(store.remove_event(e.id));
        assert!(store.event(e.id).is_none());
        assert!(!store.remove_event(e.id));
    }
}
