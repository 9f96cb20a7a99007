use serde::{Deserialize, Serialize};

use campushub_core::PrincipalId;

use crate::Role;

/// The authenticated actor behind a request.
///
/// Constructed by the gate at request entry and discarded at request exit;
/// never persisted. Secret fields of the backing account record (password
/// hash and the like) are stripped before construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub role: Role,
    pub is_active: bool,
}

impl Principal {
    pub fn new(id: PrincipalId, role: Role, is_active: bool) -> Self {
        Self {
            id,
            role,
            is_active,
        }
    }
}
