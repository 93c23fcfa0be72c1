//! Capability context.
//!
//! Gates never read global state. The snapshot they consult is provided
//! explicitly, either with the [`CapabilityProvider`] component or with
//! [`provide_capabilities`]. Components rendered outside any provider see
//! an anonymous visitor.

use leptos::prelude::*;
use vantage_rbac::{Access, CapabilitySnapshot, Permission, Role};

/// Context entry holding the current snapshot.
#[derive(Debug, Clone, Copy)]
struct CapabilityContext(Signal<CapabilitySnapshot>);

/// Make `snapshot` the capability source for the current owner and its
/// descendants.
pub fn provide_capabilities(snapshot: impl Into<Signal<CapabilitySnapshot>>) {
    provide_context(CapabilityContext(snapshot.into()));
}

/// Reactive handle onto the provided capabilities.
///
/// Every query reads the underlying signal, so calling one inside a
/// reactive closure re-runs that closure when the session changes.
pub fn use_rbac() -> Rbac {
    match use_context::<CapabilityContext>() {
        Some(CapabilityContext(snapshot)) => Rbac::new(snapshot),
        None => {
            tracing::debug!("no capability context provided, treating visitor as anonymous");
            Rbac::new(Signal::stored(CapabilitySnapshot::anonymous()))
        }
    }
}

/// Provides `snapshot` to everything rendered inside it.
#[component]
pub fn CapabilityProvider(
    /// The current visitor's capabilities.
    #[prop(into)]
    snapshot: Signal<CapabilitySnapshot>,
    children: Children,
) -> impl IntoView {
    provide_capabilities(snapshot);
    children()
}

/// Query surface returned by [`use_rbac`].
#[derive(Debug, Clone, Copy)]
pub struct Rbac {
    snapshot: Signal<CapabilitySnapshot>,
}

impl Rbac {
    /// Wrap a snapshot signal.
    pub fn new(snapshot: Signal<CapabilitySnapshot>) -> Self {
        Self { snapshot }
    }

    /// The underlying signal.
    pub fn snapshot(&self) -> Signal<CapabilitySnapshot> {
        self.snapshot
    }

    /// Evaluate an arbitrary predicate against the current snapshot.
    pub fn check(&self, predicate: impl Fn(&CapabilitySnapshot) -> bool) -> bool {
        self.snapshot.with(|snapshot| predicate(snapshot))
    }

    /// Evaluate a check that reports why it was denied.
    pub fn authorize(&self, check: impl Fn(&CapabilitySnapshot) -> Access) -> Access {
        self.snapshot.with(|snapshot| check(snapshot))
    }

    /// Whether someone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.check(CapabilitySnapshot::is_authenticated)
    }

    /// The current role.
    pub fn role(&self) -> Option<Role> {
        self.snapshot.with(CapabilitySnapshot::role)
    }

    /// Held permissions in grant order.
    pub fn permissions(&self) -> Vec<Permission> {
        self.snapshot
            .with(|snapshot| snapshot.permissions().cloned().collect())
    }

    /// Exact role match.
    pub fn has_role(&self, role: Role) -> bool {
        self.check(|snapshot| snapshot.has_role(role))
    }

    /// Role is one of `roles`; false when `roles` is empty.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.check(|snapshot| snapshot.has_any_role(roles))
    }

    /// Permission is held.
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.check(|snapshot| snapshot.has_permission(permission))
    }

    /// Permission is held, given its raw token. Malformed tokens are never held.
    pub fn has_permission_named(&self, permission: &str) -> bool {
        self.check(|snapshot| snapshot.has_permission_named(permission))
    }

    /// At least one of `permissions` is held; false when empty.
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        self.check(|snapshot| snapshot.has_any_permission(permissions))
    }

    /// Role is admin.
    pub fn is_admin(&self) -> bool {
        self.check(CapabilitySnapshot::is_admin)
    }

    /// Role is admin or moderator.
    pub fn can_moderate(&self) -> bool {
        self.check(CapabilitySnapshot::can_moderate)
    }
}
