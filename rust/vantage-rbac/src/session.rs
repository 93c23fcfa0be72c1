use serde::{Deserialize, Serialize};

use crate::{CapabilitySnapshot, PermissionRegistry, RbacError, Role};

/// Session data as handed over by the upstream authentication provider.
///
/// ```json
/// { "authenticated": true, "role": "moderator", "permissions": ["content.edit"] }
/// ```
///
/// Role and permissions of an unauthenticated session are ignored. Role
/// names must be spelled exactly as [`Role::as_str`] prints them; `"ADMIN"`
/// is an unknown role, not an admin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Whether the provider considers the visitor signed in.
    pub authenticated: bool,
    /// Role name, required when authenticated.
    pub role: Option<String>,
    /// Permission tokens.
    pub permissions: Vec<String>,
}

impl Session {
    /// Decode a session from JSON.
    pub fn from_json(document: &str) -> Result<Self, RbacError> {
        serde_json::from_str(document)
            .map_err(|error| RbacError::MalformedSession(error.to_string()))
    }

    /// Turn the session into a snapshot, failing on the first unknown role
    /// or permission.
    pub fn resolve(&self, registry: &PermissionRegistry) -> Result<CapabilitySnapshot, RbacError> {
        if !self.authenticated {
            return Ok(CapabilitySnapshot::anonymous());
        }

        let role = self.role.as_deref().ok_or(RbacError::MissingRole)?.parse::<Role>()?;
        let permissions = self
            .permissions
            .iter()
            .map(|permission| registry.validate(permission))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CapabilitySnapshot::authenticated(role).with_permissions(permissions))
    }

    /// Turn the session into a snapshot, dropping what does not validate.
    ///
    /// A missing or unknown role yields an anonymous snapshot. Invalid
    /// permissions are skipped.
    pub fn resolve_lenient(&self, registry: &PermissionRegistry) -> CapabilitySnapshot {
        if !self.authenticated {
            return CapabilitySnapshot::anonymous();
        }

        let role = self
            .role
            .as_deref()
            .ok_or(RbacError::MissingRole)
            .and_then(|name| name.parse::<Role>());
        let role = match role {
            Ok(role) => role,
            Err(error) => {
                tracing::warn!(%error, "treating session as anonymous");
                return CapabilitySnapshot::anonymous();
            }
        };

        let permissions = self
            .permissions
            .iter()
            .filter_map(|permission| match registry.validate(permission) {
                Ok(permission) => Some(permission),
                Err(error) => {
                    tracing::warn!(%error, "dropping permission");
                    None
                }
            })
            .collect::<Vec<_>>();

        CapabilitySnapshot::authenticated(role).with_permissions(permissions)
    }

    /// Resolve in strict or lenient mode, as the settings ask.
    pub fn resolve_with(
        &self,
        registry: &PermissionRegistry,
        strict: bool,
    ) -> Result<CapabilitySnapshot, RbacError> {
        if strict {
            self.resolve(registry)
        } else {
            Ok(self.resolve_lenient(registry))
        }
    }
}
