use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campushub_auth::{Owned, OwnershipField};
use campushub_core::{PrincipalId, ResourceId};

/// A community event (talks, socials, club meetings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub owner: PrincipalId,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Owned for CommunityEvent {
    fn ownership(&self) -> (OwnershipField, PrincipalId) {
        (OwnershipField::Owner, self.owner)
    }
}
