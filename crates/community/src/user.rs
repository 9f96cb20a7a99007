use serde::{Deserialize, Serialize};

use campushub_auth::{Principal, Role};
use campushub_core::PrincipalId;

/// A stored user account.
///
/// `password_hash` is the one secret field; it must never leave the store —
/// request-scoped identity travels as a [`Principal`] with secrets stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: PrincipalId,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl UserAccount {
    /// Project this account into its request-scoped identity, dropping
    /// secret fields.
    pub fn to_principal(&self) -> Principal {
        Principal::new(self.id, self.role, self.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_projection_strips_secrets() {
        let account = UserAccount {
            id: PrincipalId::new(),
            email: "ada@campus.edu".to_string(),
            display_name: "Ada".to_string(),
            role: Role::Student,
            is_active: true,
            password_hash: "argon2id$...".to_string(),
        };

        let principal = account.to_principal();
        assert_eq!(principal.id, account.id);
        assert_eq!(principal.role, Role::Student);
        assert!(principal.is_active);

        let json = serde_json::to_value(&principal).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
