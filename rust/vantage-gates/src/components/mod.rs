//! Showcase UI built on the gates.
//!
//! The component tree is:
//!
//! ```text
//! ShowcaseApp
//! ├── session picker     (swaps synthetic sessions)
//! └── CapabilityProvider
//!     ├── SiteMenu       (navigation entries per role/permission)
//!     └── Dashboard      (role-specific landing content)
//! ```

mod dashboard;
mod site_menu;

pub use dashboard::*;
pub use site_menu::*;

use leptos::prelude::*;
use vantage_rbac::{CapabilitySnapshot, PermissionRegistry, RbacSettings, Session};

use crate::CapabilityProvider;

/// Sessions offered by the picker, as the upstream provider would send them.
pub const DEMO_SESSIONS: &[(&str, &str)] = &[
    ("Signed out", r#"{ "authenticated": false }"#),
    (
        "Admin",
        r#"{ "authenticated": true, "role": "admin",
             "permissions": ["content.create", "content.edit", "content.delete",
                             "content.publish", "users.manage", "settings.manage",
                             "analytics.view"] }"#,
    ),
    (
        "Moderator",
        r#"{ "authenticated": true, "role": "moderator", "permissions": ["content.edit"] }"#,
    ),
    (
        "User",
        r#"{ "authenticated": true, "role": "user", "permissions": ["content.create"] }"#,
    ),
    ("Viewer", r#"{ "authenticated": true, "role": "viewer" }"#),
];

/// Resolve one of the [`DEMO_SESSIONS`] documents.
///
/// Unreadable documents resolve to an anonymous visitor.
pub fn demo_snapshot(
    document: &str,
    registry: &PermissionRegistry,
    settings: &RbacSettings,
) -> CapabilitySnapshot {
    match Session::from_json(document)
        .and_then(|session| session.resolve_with(registry, settings.strict))
    {
        Ok(snapshot) => snapshot,
        Err(error) => {
            tracing::warn!(%error, "could not resolve demo session");
            CapabilitySnapshot::anonymous()
        }
    }
}

/// Root component for the showcase.
#[component]
pub fn ShowcaseApp(
    /// Capability settings; defaults to the built-in registry.
    #[prop(optional)]
    settings: Option<RbacSettings>,
) -> impl IntoView {
    let settings = settings.unwrap_or_default();
    let registry = match settings.registry() {
        Ok(registry) => registry,
        Err(error) => {
            tracing::warn!(%error, "falling back to the default permission registry");
            PermissionRegistry::default()
        }
    };

    let (selected, set_selected) = signal(0usize);
    let snapshot = Signal::derive(move || {
        let (_, document) = DEMO_SESSIONS[selected.get() % DEMO_SESSIONS.len()];
        demo_snapshot(document, &registry, &settings)
    });

    view! {
        <div class="showcase-root">
            <div class="session-picker">
                {DEMO_SESSIONS
                    .iter()
                    .enumerate()
                    .map(|(index, (label, _))| {
                        view! {
                            <button
                                class="session-option"
                                class:selected=move || selected.get() == index
                                on:click=move |_| set_selected.set(index)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <CapabilityProvider snapshot=snapshot>
                <SiteMenu />
                <Dashboard />
            </CapabilityProvider>
        </div>
    }
}
