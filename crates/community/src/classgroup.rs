use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campushub_auth::{Owned, OwnershipField};
use campushub_core::{PrincipalId, ResourceId};

/// A class group led by a faculty member, with an enrollment roster.
///
/// Unlike the other kinds, class groups are not publicly searchable: only the
/// leader and enrolled members see a group in search output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGroup {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    pub leader: PrincipalId,
    #[serde(default)]
    pub enrolled: Vec<PrincipalId>,
    pub created_at: DateTime<Utc>,
}

impl ClassGroup {
    /// Whether the principal teaches or is enrolled in this group.
    pub fn is_visible_to(&self, principal: PrincipalId) -> bool {
        self.leader == principal || self.enrolled.contains(&principal)
    }
}

impl Owned for ClassGroup {
    fn ownership(&self) -> (OwnershipField, PrincipalId) {
        (OwnershipField::Leader, self.leader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(leader: PrincipalId, enrolled: Vec<PrincipalId>) -> ClassGroup {
        ClassGroup {
            id: ResourceId::new(),
            name: "CS 101".to_string(),
            description: "Intro to programming".to_string(),
            course_code: Some("CS101".to_string()),
            leader,
            enrolled,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn leader_and_enrolled_see_the_group() {
        let leader = PrincipalId::new();
        let member = PrincipalId::new();
        let outsider = PrincipalId::new();
        let g = group(leader, vec![member]);

        assert!(g.is_visible_to(leader));
        assert!(g.is_visible_to(member));
        assert!(!g.is_visible_to(outsider));
    }
}
