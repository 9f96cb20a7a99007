//! Pure authorization predicates.
//!
//! - No IO
//! - No panics
//! - No business logic (policy checks only)

use crate::error::AuthError;
use crate::ownership::Owned;
use crate::principal::Principal;
use crate::roles::Role;

/// Check that the principal's role is in the allowed set.
pub fn authorize_roles(principal: &Principal, allowed: &[Role]) -> Result<(), AuthError> {
    if allowed.contains(&principal.role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden(format!(
            "role '{}' not permitted",
            principal.role
        )))
    }
}

/// Check that the principal may act on an owned resource.
///
/// Admins pass unconditionally; otherwise the resource's single ownership
/// field must name the principal. Fetching the resource (and the resulting
/// `NotFound`) happens at the call site — this check is pure.
pub fn check_ownership<R: Owned>(principal: &Principal, resource: &R) -> Result<(), AuthError> {
    if principal.role.is_admin() {
        return Ok(());
    }

    let (field, owner) = resource.ownership();
    if owner == principal.id {
        Ok(())
    } else {
        Err(AuthError::Forbidden(format!(
            "principal does not match resource {field}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ownership::OwnershipField;
    use campushub_core::PrincipalId;

    struct FakeResource {
        field: OwnershipField,
        owner: PrincipalId,
    }

    impl Owned for FakeResource {
        fn ownership(&self) -> (OwnershipField, PrincipalId) {
            (self.field, self.owner)
        }
    }

    fn student(id: PrincipalId) -> Principal {
        Principal::new(id, Role::Student, true)
    }

    #[test]
    fn role_in_allowed_set_passes() {
        let p = student(PrincipalId::new());
        assert!(authorize_roles(&p, &[Role::Student, Role::Faculty]).is_ok());
    }

    #[test]
    fn role_outside_allowed_set_is_forbidden() {
        let p = student(PrincipalId::new());
        let result = authorize_roles(&p, &[Role::Admin]);
        assert!(matches!(result, Err(AuthError::Forbidden(_))));
    }

    #[test]
    fn admin_passes_ownership_regardless_of_owner() {
        let admin = Principal::new(PrincipalId::new(), Role::Admin, true);
        for field in [
            OwnershipField::Owner,
            OwnershipField::Author,
            OwnershipField::CreatedBy,
            OwnershipField::Leader,
        ] {
            let resource = FakeResource {
                field,
                owner: PrincipalId::new(),
            };
            assert!(check_ownership(&admin, &resource).is_ok());
        }
    }

    #[test]
    fn owner_passes_for_every_field_variant() {
        let id = PrincipalId::new();
        let p = student(id);
        for field in [
            OwnershipField::Owner,
            OwnershipField::Author,
            OwnershipField::CreatedBy,
            OwnershipField::Leader,
        ] {
            let resource = FakeResource { field, owner: id };
            assert!(check_ownership(&p, &resource).is_ok());
        }
    }

    #[test]
    fn non_owner_is_forbidden() {
        let p = student(PrincipalId::new());
        let resource = FakeResource {
            field: OwnershipField::Leader,
            owner: PrincipalId::new(),
        };
        let result = check_ownership(&p, &resource);
        assert!(matches!(result, Err(AuthError::Forbidden(_))));
    }
}
