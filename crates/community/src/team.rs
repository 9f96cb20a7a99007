use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campushub_auth::{Owned, OwnershipField};
use campushub_core::{PrincipalId, ResourceId};

/// A team with a leader and a member roster (team chat lives elsewhere).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
    pub leader: PrincipalId,
    #[serde(default)]
    pub members: Vec<PrincipalId>,
    pub created_at: DateTime<Utc>,
}

impl Owned for Team {
    fn ownership(&self) -> (OwnershipField, PrincipalId) {
        (OwnershipField::Leader, self.leader)
    }
}
