use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campushub_core::ResourceId;

/// The resource kind a search result came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Event,
    Project,
    Forum,
    Team,
    ClassGroup,
    User,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Event => "event",
            SearchKind::Project => "project",
            SearchKind::Forum => "forum",
            SearchKind::Team => "team",
            SearchKind::ClassGroup => "classgroup",
            SearchKind::User => "user",
        }
    }
}

impl core::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized projection every kind's records are mapped into.
///
/// Produced only by normalization and never stored — a transient view over
/// live resource state. `id` is unique only in combination with `kind`.
/// Fields absent in a given kind's schema stay `None`; they are never
/// defaulted to placeholder strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: ResourceId,
    pub kind: SearchKind,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}
