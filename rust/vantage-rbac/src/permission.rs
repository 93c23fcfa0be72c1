use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{RbacError, RbacSettings};

/// A fine-grained capability in `resource.action` form, e.g. `content.edit`.
///
/// Both segments are non-empty and made of lowercase ASCII letters, digits,
/// `_` or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission(Cow<'static, str>);

/// Permissions used by the site's own pages.
pub mod permissions {
    use super::Permission;

    /// Create new posts and pages.
    pub const CONTENT_CREATE: Permission = Permission::known("content.create");
    /// Edit existing content.
    pub const CONTENT_EDIT: Permission = Permission::known("content.edit");
    /// Remove content.
    pub const CONTENT_DELETE: Permission = Permission::known("content.delete");
    /// Publish drafts.
    pub const CONTENT_PUBLISH: Permission = Permission::known("content.publish");
    /// Manage user accounts.
    pub const USERS_MANAGE: Permission = Permission::known("users.manage");
    /// Change site settings.
    pub const SETTINGS_MANAGE: Permission = Permission::known("settings.manage");
    /// Read the analytics dashboard.
    pub const ANALYTICS_VIEW: Permission = Permission::known("analytics.view");

    /// Every permission above, in declaration order.
    pub const ALL: [Permission; 7] = [
        CONTENT_CREATE,
        CONTENT_EDIT,
        CONTENT_DELETE,
        CONTENT_PUBLISH,
        USERS_MANAGE,
        SETTINGS_MANAGE,
        ANALYTICS_VIEW,
    ];
}

impl Permission {
    const fn known(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Validate and wrap a `resource.action` token.
    pub fn parse(value: impl Into<Cow<'static, str>>) -> Result<Self, RbacError> {
        let value = value.into();
        validate(&value).map_err(|reason| RbacError::MalformedPermission {
            permission: value.to_string(),
            reason,
        })?;
        Ok(Self(value))
    }

    /// The full token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The segment before the dot.
    pub fn resource(&self) -> &str {
        let value = self.as_str();
        value.split_once('.').map(|(resource, _)| resource).unwrap_or(value)
    }

    /// The segment after the dot.
    pub fn action(&self) -> &str {
        self.as_str()
            .split_once('.')
            .map(|(_, action)| action)
            .unwrap_or("")
    }
}

fn validate(value: &str) -> Result<(), &'static str> {
    let (resource, action) = value.split_once('.').ok_or("expected 'resource.action'")?;
    if resource.is_empty() {
        return Err("resource segment is empty");
    }
    if action.is_empty() {
        return Err("action segment is empty");
    }
    if action.contains('.') {
        return Err("more than one '.' separator");
    }
    let valid = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-';
    if !resource.chars().all(valid) || !action.chars().all(valid) {
        return Err("segments may only contain [a-z0-9_-]");
    }
    Ok(())
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Permission {
    type Err = RbacError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value.to_string())
    }
}

impl TryFrom<String> for Permission {
    type Error = RbacError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.0.into_owned()
    }
}

/// The set of permissions the application knows about.
///
/// Sessions are validated against a registry so that a typo in a
/// permission string is reported instead of silently never matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRegistry {
    known: IndexSet<Permission>,
}

impl PermissionRegistry {
    /// An empty registry. Every permission is unregistered.
    pub fn empty() -> Self {
        Self {
            known: IndexSet::new(),
        }
    }

    /// Registry built from the given permissions.
    pub fn new(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            known: permissions.into_iter().collect(),
        }
    }

    /// Registry built from a settings document.
    pub fn from_settings(settings: &RbacSettings) -> Result<Self, RbacError> {
        settings
            .permissions
            .iter()
            .map(|permission| Permission::parse(permission.clone()))
            .collect::<Result<IndexSet<_>, _>>()
            .map(|known| Self { known })
    }

    /// Add a permission.
    pub fn register(&mut self, permission: Permission) -> &mut Self {
        self.known.insert(permission);
        self
    }

    /// Whether the permission is registered.
    pub fn contains(&self, permission: &Permission) -> bool {
        self.known.contains(permission)
    }

    /// Check that a raw string is a well formed, registered permission.
    pub fn validate(&self, value: &str) -> Result<Permission, RbacError> {
        let permission = value.parse::<Permission>()?;
        if self.contains(&permission) {
            Ok(permission)
        } else {
            Err(RbacError::UnregisteredPermission(permission.to_string()))
        }
    }

    /// Registered permissions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.known.iter()
    }

    /// Number of registered permissions.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Default for PermissionRegistry {
    fn default() -> Self {
        Self::new(permissions::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    use wasm_bindgen_test::wasm_bindgen_test;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_parses_resource_and_action() -> TestResult {
        let permission = Permission::parse("content.edit")?;
        assert_eq!(permission.resource(), "content");
        assert_eq!(permission.action(), "edit");
        assert_eq!(permission, permissions::CONTENT_EDIT);
        Ok(())
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_rejects_malformed_permissions() {
        for value in [
            "content",
            ".edit",
            "content.",
            "content.edit.all",
            "Content.Edit",
            "content edit",
            "",
        ] {
            assert!(
                matches!(
                    value.parse::<Permission>(),
                    Err(RbacError::MalformedPermission { .. })
                ),
                "expected '{value}' to be rejected"
            );
        }
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_accepts_digits_dashes_and_underscores() -> TestResult {
        let permission: Permission = "blog_posts.re-index2".parse()?;
        assert_eq!(permission.resource(), "blog_posts");
        assert_eq!(permission.action(), "re-index2");
        Ok(())
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_deserializes_through_validation() {
        let ok: Result<Permission, _> = serde_json::from_str("\"users.manage\"");
        assert_eq!(ok.ok(), Some(permissions::USERS_MANAGE));

        let bad: Result<Permission, _> = serde_json::from_str("\"users\"");
        assert!(bad.is_err());
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_validates_against_the_registry() -> TestResult {
        let registry = PermissionRegistry::default();
        assert_eq!(registry.len(), permissions::ALL.len());
        assert_eq!(registry.validate("content.delete")?, permissions::CONTENT_DELETE);
        assert_eq!(
            registry.validate("billing.refund"),
            Err(RbacError::UnregisteredPermission("billing.refund".into()))
        );
        assert!(matches!(
            registry.validate("billing"),
            Err(RbacError::MalformedPermission { .. })
        ));
        Ok(())
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_registers_new_permissions() -> TestResult {
        let mut registry = PermissionRegistry::empty();
        assert!(registry.is_empty());

        let refund = Permission::parse("billing.refund")?;
        registry
            .register(refund.clone())
            .register(permissions::ANALYTICS_VIEW)
            .register(refund.clone());

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&refund));
        assert_eq!(
            registry.iter().cloned().collect::<Vec<_>>(),
            vec![refund, permissions::ANALYTICS_VIEW]
        );
        Ok(())
    }
}
