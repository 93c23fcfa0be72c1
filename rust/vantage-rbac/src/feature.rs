use std::borrow::Cow;

use crate::{Access, CapabilitySnapshot, Permission, Role};

/// Role and permission requirements attached to a named feature.
///
/// The feature name is a label for readers and logs. It is not looked up
/// in any flag store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRule {
    feature: Cow<'static, str>,
    allowed_roles: Vec<Role>,
    required_permissions: Vec<Permission>,
}

impl FeatureRule {
    /// A rule with no requirements.
    pub fn new(feature: impl Into<Cow<'static, str>>) -> Self {
        Self {
            feature: feature.into(),
            allowed_roles: Vec::new(),
            required_permissions: Vec::new(),
        }
    }

    /// Restrict to the given roles.
    pub fn allow_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles.extend(roles);
        self
    }

    /// Require at least one of the given permissions.
    pub fn require_any_permission(
        mut self,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        self.required_permissions.extend(permissions);
        self
    }

    /// The feature label.
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// Allowed roles. Empty means any role.
    pub fn allowed_roles(&self) -> &[Role] {
        &self.allowed_roles
    }

    /// Candidate permissions. Empty means none required.
    pub fn required_permissions(&self) -> &[Permission] {
        &self.required_permissions
    }

    /// True when the rule places no restriction at all. Such a rule is
    /// satisfied by every visitor, signed in or not.
    pub fn is_unrestricted(&self) -> bool {
        self.allowed_roles.is_empty() && self.required_permissions.is_empty()
    }

    /// Evaluate the rule.
    ///
    /// Passes when the role clause holds (no roles listed, or the current
    /// role is one of them) and the permission clause holds (no
    /// permissions listed, or at least one of them is held).
    pub fn authorize(&self, snapshot: &CapabilitySnapshot) -> Access {
        if self.is_unrestricted() {
            tracing::debug!(feature = %self.feature, "feature rule has no restrictions");
        }

        let roles = if self.allowed_roles.is_empty() {
            Access::Granted
        } else {
            snapshot.authorize_any_role(&self.allowed_roles)
        };
        let permissions = if self.required_permissions.is_empty() {
            Access::Granted
        } else {
            snapshot.authorize_any_permission(&self.required_permissions)
        };

        roles.and(permissions)
    }

    /// Boolean form of [`authorize`](Self::authorize).
    pub fn evaluate(&self, snapshot: &CapabilitySnapshot) -> bool {
        self.authorize(snapshot).is_granted()
    }
}
