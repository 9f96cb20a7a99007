use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campushub_auth::{Owned, OwnershipField};
use campushub_core::{PrincipalId, ResourceId};

/// A forum post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: ResourceId,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub author: PrincipalId,
    pub posted_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Owned for ForumPost {
    fn ownership(&self) -> (OwnershipField, PrincipalId) {
        (OwnershipField::Author, self.author)
    }
}
