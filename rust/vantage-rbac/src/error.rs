/// Errors that can occur while ingesting role and permission data.
///
/// Query methods on [`crate::CapabilitySnapshot`] never fail. These errors
/// only surface when a session or registry is being constructed from
/// untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RbacError {
    /// The role string does not name any known [`crate::Role`].
    #[error("Unknown role: '{0}'")]
    UnknownRole(String),

    /// An authenticated session did not carry a role.
    #[error("Authenticated session is missing a role")]
    MissingRole,

    /// The permission string is not a `resource.action` token.
    #[error("Malformed permission '{permission}': {reason}")]
    MalformedPermission {
        /// The rejected permission string.
        permission: String,
        /// Why the string was rejected.
        reason: &'static str,
    },

    /// The permission is well formed but not present in the registry.
    #[error("Permission '{0}' is not registered")]
    UnregisteredPermission(String),

    /// A session document from the upstream provider could not be decoded.
    #[error("Malformed session: {0}")]
    MalformedSession(String),

    /// A settings document could not be decoded.
    #[error("Invalid settings: {0}")]
    Config(String),
}
