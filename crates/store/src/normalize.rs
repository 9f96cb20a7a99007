//! Mapping kind-native records into the common [`SearchResult`] projection.
//!
//! Fields absent in a kind's schema stay `None` — never defaulted to
//! placeholder strings.

use campushub_community::{ClassGroup, CommunityEvent, ForumPost, Project, Team};
use campushub_search::{SearchKind, SearchResult};

pub fn normalize_event(e: &CommunityEvent) -> SearchResult {
    SearchResult {
        id: e.id,
        kind: SearchKind::Event,
        title: e.title.clone(),
        description: e.description.clone(),
        url: format!("/events/{}", e.id),
        category: e.category.clone(),
        author: None,
        timestamp: Some(e.starts_at),
        tags: e.tags.clone(),
    }
}

pub fn normalize_post(p: &ForumPost) -> SearchResult {
    SearchResult {
        id: p.id,
        kind: SearchKind::Forum,
        title: p.title.clone(),
        description: p.content.clone(),
        url: format!("/forum/{}", p.id),
        category: p.category.clone(),
        author: Some(p.author.to_string()),
        timestamp: Some(p.posted_at),
        tags: p.tags.clone(),
    }
}

pub fn normalize_project(p: &Project) -> SearchResult {
    SearchResult {
        id: p.id,
        kind: SearchKind::Project,
        title: p.name.clone(),
        description: p.description.clone(),
        url: format!("/projects/{}", p.id),
        category: p.category.clone(),
        author: None,
        timestamp: Some(p.created_at),
        tags: p.tags.clone(),
    }
}

pub fn normalize_team(t: &Team) -> SearchResult {
    SearchResult {
        id: t.id,
        kind: SearchKind::Team,
        title: t.name.clone(),
        description: t.description.clone(),
        url: format!("/teams/{}", t.id),
        category: None,
        author: None,
        timestamp: Some(t.created_at),
        tags: vec![],
    }
}

pub fn normalize_class_group(g: &ClassGroup) -> SearchResult {
    SearchResult {
        id: g.id,
        kind: SearchKind::ClassGroup,
        title: g.name.clone(),
        description: g.description.clone(),
        url: format!("/classgroups/{}", g.id),
        category: g.course_code.clone(),
        author: None,
        timestamp: Some(g.created_at),
        tags: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_core::{PrincipalId, ResourceId};
    use chrono::Utc;

    #[test]
    fn event_normalization_preserves_identity_fields() {
        let e = CommunityEvent {
            id: ResourceId::new(),
            title: "Robotics Demo".to_string(),
            description: "annual showcase".to_string(),
            location: Some("Hall B".to_string()),
            category: None,
            starts_at: Utc::now(),
            owner: PrincipalId::new(),
            tags: vec!["robotics".to_string()],
        };

        let r = normalize_event(&e);
        assert_eq!(r.id, e.id);
        assert_eq!(r.kind, SearchKind::Event);
        assert_eq!(r.title, e.title);
        assert_eq!(r.description, e.description);
        // Absent category stays absent, not an empty string.
        assert_eq!(r.category, None);
        assert_eq!(r.tags, e.tags);
    }

    #[test]
    fn team_has_no_category_author_or_tags() {
        let t = Team {
            id: ResourceId::new(),
            name: "Robotics".to_string(),
            description: "Builds robots".to_string(),
            leader: PrincipalId::new(),
            members: vec![],
            created_at: Utc::now(),
        };

        let r = normalize_team(&t);
        assert_eq!(r.category, None);
        assert_eq!(r.author, None);
        assert!(r.tags.is_empty());
    }

    #[test]
    fn forum_author_is_carried() {
        let p = ForumPost {
            id: ResourceId::new(),
            title: "Robotics meetup".to_string(),
            content: "who's in?".to_string(),
            category: Some("clubs".to_string()),
            author: PrincipalId::new(),
            posted_at: Utc::now(),
            tags: vec![],
        };

        let r = normalize_post(&p);
        assert_eq!(r.author, Some(p.author.to_string()));
        assert_eq!(r.category.as_deref(), Some("clubs"));
    }
}
