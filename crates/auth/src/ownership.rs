use serde::{Deserialize, Serialize};

use campushub_core::PrincipalId;

/// The attribute naming the accountable principal of a resource.
///
/// The attribute name varies by resource kind, but every kind populates
/// exactly one of these. Modeling the set as a closed enum turns what would
/// otherwise be duck-typed field probing into an exhaustively-matched check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipField {
    Owner,
    Author,
    CreatedBy,
    Leader,
}

impl OwnershipField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnershipField::Owner => "owner",
            OwnershipField::Author => "author",
            OwnershipField::CreatedBy => "created_by",
            OwnershipField::Leader => "leader",
        }
    }
}

impl core::fmt::Display for OwnershipField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource with a single accountable principal.
///
/// Each resource kind resolves its own ownership attribute; the gate never
/// needs per-kind code beyond this seam.
pub trait Owned {
    fn ownership(&self) -> (OwnershipField, PrincipalId);

    fn owner_id(&self) -> PrincipalId {
        self.ownership().1
    }
}
