use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campushub_auth::{Owned, OwnershipField};
use campushub_core::{PrincipalId, ResourceId};

/// A student/faculty project looking for collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_by: PrincipalId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Owned for Project {
    fn ownership(&self) -> (OwnershipField, PrincipalId) {
        (OwnershipField::CreatedBy, self.created_by)
    }
}
