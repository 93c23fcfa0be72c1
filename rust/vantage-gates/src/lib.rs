#![warn(missing_docs)]

//! Leptos components that show or hide UI based on the visitor's
//! capabilities.
//!
//! Gates read a [`vantage_rbac::CapabilitySnapshot`] from context. Provide
//! one near the root of the application and wrap anything role- or
//! permission-dependent in a gate:
//!
//! ```rust
//! use leptos::prelude::*;
//! use vantage_gates::{AdminGate, AuthGate, CapabilityProvider, PermissionGate};
//! use vantage_rbac::{CapabilitySnapshot, Role};
//! use vantage_rbac::permissions::CONTENT_EDIT;
//!
//! #[component]
//! fn Toolbar() -> impl IntoView {
//!     let session = RwSignal::new(
//!         CapabilitySnapshot::authenticated(Role::Moderator).with_permission(CONTENT_EDIT),
//!     );
//!
//!     view! {
//!         <CapabilityProvider snapshot=session>
//!             <AuthGate fallback=|| view! { <a href="/login">"Sign in"</a> }>
//!                 <PermissionGate permission=CONTENT_EDIT>
//!                     <button>"Edit"</button>
//!                 </PermissionGate>
//!                 <AdminGate>
//!                     <button>"Settings"</button>
//!                 </AdminGate>
//!             </AuthGate>
//!         </CapabilityProvider>
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - **[`context`]**: [`CapabilityProvider`], [`provide_capabilities`] and
//!   the [`use_rbac`] hook.
//! - **[`gates`]**: `RoleGate`, `AnyRoleGate`, `PermissionGate`,
//!   `AuthGate`, `AdminGate`, `ModeratorGate`, `FeatureFlag`, `RoleSwitch`.
//! - **[`components`]**: showcase menu and dashboard built from the gates.
//!
//! Gates decide what is rendered and nothing more. They are not an
//! authorization mechanism; the server behind every action has to check
//! the caller itself.

pub mod context;
pub use context::*;

pub mod gates;
pub use gates::*;

pub mod components;
