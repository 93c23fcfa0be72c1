use serde::{Deserialize, Serialize};

use crate::{PermissionRegistry, RbacError, permissions};

/// Declarative configuration for the capability layer.
///
/// ```json
/// { "permissions": ["content.edit", "billing.refund"], "strict": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RbacSettings {
    /// Permission tokens to register.
    pub permissions: Vec<String>,

    /// When true, a session carrying an unknown role or permission is
    /// rejected. When false, offending entries are dropped with a warning.
    pub strict: bool,
}

impl Default for RbacSettings {
    fn default() -> Self {
        Self {
            permissions: permissions::ALL.iter().map(|p| p.to_string()).collect(),
            strict: true,
        }
    }
}

impl RbacSettings {
    /// Decode settings from a JSON document. Missing fields take their
    /// default values.
    pub fn from_json(document: &str) -> Result<Self, RbacError> {
        serde_json::from_str(document).map_err(|error| RbacError::Config(error.to_string()))
    }

    /// Build the registry these settings describe.
    pub fn registry(&self) -> Result<PermissionRegistry, RbacError> {
        PermissionRegistry::from_settings(self)
    }
}
