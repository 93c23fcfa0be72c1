#![warn(missing_docs)]

//! Role and permission checks for conditionally rendered UI.
//!
//! This crate answers point-in-time questions about the current visitor:
//! are they signed in, which [`Role`] do they hold, which [`Permission`]s
//! have they been granted. The answers come from a [`CapabilitySnapshot`],
//! an immutable value built from the upstream [`Session`].
//!
//! # Quick Example
//!
//! ```rust
//! use vantage_rbac::{Access, CapabilitySnapshot, Denial, PermissionRegistry, Role, Session};
//! use vantage_rbac::permissions::{CONTENT_DELETE, CONTENT_EDIT};
//!
//! let session = Session::from_json(
//!     r#"{ "authenticated": true, "role": "moderator", "permissions": ["content.edit"] }"#,
//! ).unwrap();
//! let snapshot = session.resolve(&PermissionRegistry::default()).unwrap();
//!
//! assert!(snapshot.can_moderate());
//! assert!(!snapshot.is_admin());
//! assert!(snapshot.has_permission(&CONTENT_EDIT));
//! assert_eq!(
//!     snapshot.authorize_permission(&CONTENT_DELETE),
//!     Access::Denied(Denial::InsufficientPermission),
//! );
//! assert_eq!(
//!     CapabilitySnapshot::anonymous().authorize_role(Role::User),
//!     Access::Denied(Denial::Unauthenticated),
//! );
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Role`] | Closed set: admin, moderator, user, viewer |
//! | [`Permission`] | `resource.action` token, e.g. `content.edit` |
//! | [`PermissionRegistry`] | Known permissions; sessions are validated against it |
//! | [`CapabilitySnapshot`] | Read-only predicates over the current visitor |
//! | [`Access`] | Three-way result: granted, or denied with a [`Denial`] |
//! | [`FeatureRule`] | Named role/permission requirement |
//! | [`RoleSwitch`] | First-match role to value mapping |
//!
//! Admins satisfy moderator checks ([`CapabilitySnapshot::can_moderate`]).
//! There is no other role hierarchy; [`CapabilitySnapshot::has_role`] is
//! an exact match.
//!
//! # Not a security boundary
//!
//! Everything here runs in the browser and only decides what is shown.
//! Hiding a button does not stop anyone from calling the endpoint behind
//! it. Servers must authorize every request on their own.

mod error;
pub use error::*;

mod role;
pub use role::*;

mod permission;
pub use permission::*;

mod settings;
pub use settings::*;

mod access;
pub use access::*;

mod snapshot;
pub use snapshot::*;

mod session;
pub use session::*;

mod feature;
pub use feature::*;

mod switch;
pub use switch::*;
