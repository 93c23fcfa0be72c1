use indexmap::IndexSet;

use crate::{Access, Denial, Permission, Role};

/// The signed-in half of a [`CapabilitySnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Principal {
    role: Role,
    permissions: IndexSet<Permission>,
}

/// Read-only view of the current user's capabilities.
///
/// A snapshot is either anonymous or carries exactly one [`Role`] and a set
/// of [`Permission`]s. An anonymous snapshot can not hold a role or
/// permissions, so every role or permission check against it is denied
/// with [`Denial::Unauthenticated`].
///
/// Snapshots are plain values. A new snapshot is produced whenever the
/// upstream session changes; nothing here mutates one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySnapshot {
    principal: Option<Principal>,
}

impl CapabilitySnapshot {
    /// Snapshot for a visitor that is not signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Snapshot for a signed-in user with the given role and no permissions.
    pub fn authenticated(role: Role) -> Self {
        Self {
            principal: Some(Principal {
                role,
                permissions: IndexSet::new(),
            }),
        }
    }

    /// Add a permission. Has no effect on an anonymous snapshot.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        if let Some(principal) = self.principal.as_mut() {
            principal.permissions.insert(permission);
        }
        self
    }

    /// Add several permissions. Has no effect on an anonymous snapshot.
    pub fn with_permissions(self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        permissions
            .into_iter()
            .fold(self, |snapshot, permission| snapshot.with_permission(permission))
    }

    /// Whether someone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// The current role, `None` when anonymous.
    pub fn role(&self) -> Option<Role> {
        self.principal.as_ref().map(|principal| principal.role)
    }

    /// Held permissions in the order they were granted.
    pub fn permissions(&self) -> impl Iterator<Item = &Permission> {
        self.principal
            .iter()
            .flat_map(|principal| principal.permissions.iter())
    }

    /// True iff the current role is `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.authorize_role(role).is_granted()
    }

    /// True iff the current role is one of `roles`. Always false for an
    /// empty slice.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.authorize_any_role(roles).is_granted()
    }

    /// True iff `permission` is held.
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.authorize_permission(permission).is_granted()
    }

    /// Like [`has_permission`](Self::has_permission), taking the raw token.
    /// Malformed tokens are never held.
    pub fn has_permission_named(&self, permission: &str) -> bool {
        permission
            .parse::<Permission>()
            .is_ok_and(|permission| self.has_permission(&permission))
    }

    /// True iff at least one of `permissions` is held. Always false for an
    /// empty slice.
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        self.authorize_any_permission(permissions).is_granted()
    }

    /// True iff the role is [`Role::Admin`].
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// True iff the role is [`Role::Admin`] or [`Role::Moderator`].
    pub fn can_moderate(&self) -> bool {
        self.has_any_role(&Role::MODERATORS)
    }

    /// Check that someone is signed in.
    pub fn authorize_authenticated(&self) -> Access {
        traced(
            "authenticated",
            Access::grant_if(self.is_authenticated(), Denial::Unauthenticated),
        )
    }

    /// Check for an exact role.
    pub fn authorize_role(&self, role: Role) -> Access {
        self.authorize_any_role(std::slice::from_ref(&role))
    }

    /// Check for membership in a set of roles.
    pub fn authorize_any_role(&self, roles: &[Role]) -> Access {
        let access = match &self.principal {
            None => Access::Denied(Denial::Unauthenticated),
            Some(principal) => {
                Access::grant_if(roles.contains(&principal.role), Denial::InsufficientRole)
            }
        };
        traced("role", access)
    }

    /// Check for a single permission.
    pub fn authorize_permission(&self, permission: &Permission) -> Access {
        self.authorize_any_permission(std::slice::from_ref(permission))
    }

    /// Check that at least one of `permissions` is held.
    pub fn authorize_any_permission(&self, permissions: &[Permission]) -> Access {
        let access = match &self.principal {
            None => Access::Denied(Denial::Unauthenticated),
            Some(principal) => Access::grant_if(
                permissions
                    .iter()
                    .any(|permission| principal.permissions.contains(permission)),
                Denial::InsufficientPermission,
            ),
        };
        traced("permission", access)
    }
}

fn traced(check: &'static str, access: Access) -> Access {
    if let Access::Denied(reason) = access {
        tracing::trace!(check, %reason, "capability check denied");
    }
    access
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    use wasm_bindgen_test::wasm_bindgen_test;
    use crate::permissions::{CONTENT_DELETE, CONTENT_EDIT, USERS_MANAGE};
    use pretty_assertions::assert_eq;

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_denies_everything_for_anonymous_visitors() {
        let snapshot = CapabilitySnapshot::anonymous().with_permission(CONTENT_EDIT);

        assert!(!snapshot.is_authenticated());
        assert_eq!(snapshot.role(), None);
        assert_eq!(snapshot.permissions().count(), 0);
        assert!(!snapshot.is_admin());
        assert!(!snapshot.can_moderate());
        assert!(!snapshot.has_permission(&CONTENT_EDIT));
        assert_eq!(
            snapshot.authorize_role(Role::Viewer),
            Access::Denied(Denial::Unauthenticated)
        );
        assert_eq!(
            snapshot.authorize_permission(&CONTENT_EDIT),
            Access::Denied(Denial::Unauthenticated)
        );
        assert_eq!(
            snapshot.authorize_authenticated(),
            Access::Denied(Denial::Unauthenticated)
        );
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_answers_the_moderator_scenario() {
        let snapshot = CapabilitySnapshot::authenticated(Role::Moderator).with_permission(CONTENT_EDIT);

        assert!(snapshot.can_moderate());
        assert!(!snapshot.is_admin());
        assert!(snapshot.has_permission(&CONTENT_EDIT));
        assert!(!snapshot.has_permission(&CONTENT_DELETE));
        assert_eq!(
            snapshot.authorize_role(Role::Admin),
            Access::Denied(Denial::InsufficientRole)
        );
        assert_eq!(
            snapshot.authorize_permission(&CONTENT_DELETE),
            Access::Denied(Denial::InsufficientPermission)
        );
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_treats_an_empty_role_set_as_denied() {
        for role in Role::ALL {
            let snapshot = CapabilitySnapshot::authenticated(role);
            assert!(!snapshot.has_any_role(&[]));
            assert_eq!(
                snapshot.authorize_any_role(&[]),
                Access::Denied(Denial::InsufficientRole)
            );
        }
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_treats_an_empty_permission_set_as_denied() {
        let snapshot = CapabilitySnapshot::authenticated(Role::Admin).with_permission(USERS_MANAGE);
        assert!(!snapshot.has_any_permission(&[]));
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_keeps_grant_order_and_drops_duplicates() {
        let snapshot = CapabilitySnapshot::authenticated(Role::User).with_permissions([
            CONTENT_DELETE,
            CONTENT_EDIT,
            CONTENT_DELETE,
        ]);

        assert_eq!(
            snapshot.permissions().cloned().collect::<Vec<_>>(),
            vec![CONTENT_DELETE, CONTENT_EDIT]
        );
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_checks_permissions_by_name() {
        let snapshot = CapabilitySnapshot::authenticated(Role::User).with_permission(CONTENT_EDIT);

        assert!(snapshot.has_permission_named("content.edit"));
        assert!(!snapshot.has_permission_named("content.delete"));
        assert!(!snapshot.has_permission_named("not a permission"));
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test_log::test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_reports_denials_without_failing() {
        let snapshot = CapabilitySnapshot::authenticated(Role::Viewer);
        assert!(!snapshot.has_role(Role::Admin));
        assert!(!snapshot.has_permission(&USERS_MANAGE));
        assert!(snapshot.authorize_authenticated().is_granted());
    }

    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_role() -> impl Strategy<Value = Role> {
            prop::sample::select(Role::ALL.to_vec())
        }

        fn any_permission() -> impl Strategy<Value = Permission> {
            prop::sample::select(crate::permissions::ALL.to_vec())
        }

        proptest! {
            #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
            fn it_matches_roles_exactly(current in any_role(), wanted in any_role()) {
                let snapshot = CapabilitySnapshot::authenticated(current);
                prop_assert_eq!(snapshot.has_role(wanted), current == wanted);
            }

            #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
            fn it_matches_role_sets_by_membership(
                current in any_role(),
                wanted in prop::collection::vec(any_role(), 0..4),
            ) {
                let snapshot = CapabilitySnapshot::authenticated(current);
                prop_assert_eq!(snapshot.has_any_role(&wanted), wanted.contains(&current));
            }

            #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
            fn it_derives_admin_and_moderator_from_role(current in any_role()) {
                let snapshot = CapabilitySnapshot::authenticated(current);
                prop_assert_eq!(snapshot.is_admin(), current == Role::Admin);
                prop_assert_eq!(
                    snapshot.can_moderate(),
                    current == Role::Admin || current == Role::Moderator
                );
            }

            #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
            fn it_checks_permissions_independently_of_role(
                current in any_role(),
                held in prop::collection::vec(any_permission(), 0..5),
                wanted in any_permission(),
            ) {
                let snapshot = CapabilitySnapshot::authenticated(current)
                    .with_permissions(held.iter().cloned());
                prop_assert_eq!(snapshot.has_permission(&wanted), held.contains(&wanted));
            }
        }
    }
}
