//! Conditional rendering components.
//!
//! Every gate renders its children when its check passes and its
//! `fallback` otherwise. The fallback defaults to nothing. Checks are
//! re-evaluated whenever the provided snapshot changes.

use leptos::prelude::*;
use vantage_rbac::{CapabilitySnapshot, FeatureRule, Permission, Role};

use crate::use_rbac;

fn gated(
    predicate: impl Fn(&CapabilitySnapshot) -> bool + Send + Sync + 'static,
    children: ChildrenFn,
    fallback: ViewFn,
) -> impl IntoView {
    let rbac = use_rbac();
    move || {
        if rbac.check(&predicate) {
            children()
        } else {
            fallback.run()
        }
    }
}

/// Renders children only for visitors holding exactly `role`.
#[component]
pub fn RoleGate(
    /// Required role.
    role: Role,
    /// Shown when the role does not match.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    gated(move |snapshot| snapshot.has_role(role), children, fallback)
}

/// Renders children for visitors holding any of `roles`. An empty list
/// admits nobody.
#[component]
pub fn AnyRoleGate(
    /// Accepted roles.
    #[prop(into)]
    roles: Vec<Role>,
    /// Shown when no role matches.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    gated(move |snapshot| snapshot.has_any_role(&roles), children, fallback)
}

/// Renders children for visitors holding `permission`.
#[component]
pub fn PermissionGate(
    /// Required permission.
    #[prop(into)]
    permission: Permission,
    /// Shown when the permission is missing.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    gated(
        move |snapshot| snapshot.has_permission(&permission),
        children,
        fallback,
    )
}

/// Renders children for signed-in visitors, whatever their role.
#[component]
pub fn AuthGate(
    /// Shown to anonymous visitors.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    gated(CapabilitySnapshot::is_authenticated, children, fallback)
}

/// Same as `RoleGate` with [`Role::Admin`].
#[component]
pub fn AdminGate(
    /// Shown to everyone but admins.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    gated(|snapshot| snapshot.has_role(Role::Admin), children, fallback)
}

/// Same as `AnyRoleGate` with admins and moderators.
#[component]
pub fn ModeratorGate(
    /// Shown to everyone but admins and moderators.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    gated(
        |snapshot| snapshot.has_any_role(&Role::MODERATORS),
        children,
        fallback,
    )
}

/// Renders children when the visitor satisfies a [`FeatureRule`].
///
/// With both lists empty the rule is vacuous and children are shown to
/// every visitor, including anonymous ones.
#[component]
pub fn FeatureFlag(
    /// Label for the feature. Not checked against anything.
    #[prop(into)]
    feature: String,
    /// Accepted roles. Empty accepts any role.
    #[prop(optional, into)]
    allowed_roles: Vec<Role>,
    /// At least one of these must be held. Empty requires none.
    #[prop(optional, into)]
    required_permissions: Vec<Permission>,
    /// Shown when the rule is not satisfied.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let rule = FeatureRule::new(feature)
        .allow_roles(allowed_roles)
        .require_any_permission(required_permissions);
    gated(move |snapshot| rule.evaluate(snapshot), children, fallback)
}

/// One arm of a `RoleSwitch`.
#[derive(Clone)]
pub struct RoleCase {
    role: Role,
    view: ViewFn,
}

impl RoleCase {
    /// Render `view` for visitors holding `role`.
    pub fn new(role: Role, view: impl Into<ViewFn>) -> Self {
        Self {
            role,
            view: view.into(),
        }
    }
}

/// Renders the first case whose role equals the visitor's role, or
/// `default_content` when none does.
#[component]
pub fn RoleSwitch(
    /// Cases, matched in order.
    cases: Vec<RoleCase>,
    /// Shown when no case matches, including for anonymous visitors.
    #[prop(optional, into)]
    default_content: ViewFn,
) -> impl IntoView {
    let rbac = use_rbac();
    let switch = cases.into_iter().fold(
        vantage_rbac::RoleSwitch::new(default_content),
        |switch, case| switch.case(case.role, case.view),
    );
    move || {
        rbac.snapshot()
            .with(|snapshot| switch.select(snapshot).clone())
            .run()
    }
}
