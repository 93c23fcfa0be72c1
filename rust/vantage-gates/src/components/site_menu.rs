//! Navigation menu whose entries depend on the visitor's capabilities.

use leptos::prelude::*;
use vantage_rbac::permissions::{CONTENT_CREATE, SETTINGS_MANAGE, USERS_MANAGE};

use crate::{AdminGate, AuthGate, ModeratorGate, PermissionGate, use_rbac};

/// Site navigation.
///
/// Public links are always shown. Signed-in visitors see their role, and
/// the management entries appear only for the roles or permissions they
/// require.
#[component]
pub fn SiteMenu() -> impl IntoView {
    let rbac = use_rbac();

    view! {
        <nav class="site-menu">
            <ul>
                <li><a href="/">"Home"</a></li>
                <li><a href="/agents">"Agents"</a></li>
                <li><a href="/coaching">"Coaching"</a></li>
                <li><a href="/blog">"Blog"</a></li>
                <PermissionGate permission=CONTENT_CREATE>
                    <li><a href="/blog/new">"New post"</a></li>
                </PermissionGate>
                <ModeratorGate>
                    <li><a href="/moderation">"Moderation queue"</a></li>
                </ModeratorGate>
                <AdminGate>
                    <li><a href="/admin/users">"Users"</a></li>
                    <li><a href="/admin/settings">"Site settings"</a></li>
                </AdminGate>
            </ul>
            <AuthGate fallback=|| view! { <a class="sign-in" href="/login">"Sign in"</a> }>
                <span class="signed-in-as">
                    "Signed in as "
                    {move || rbac.role().map(|role| role.to_string()).unwrap_or_default()}
                </span>
                <PermissionGate
                    permission=USERS_MANAGE
                    fallback=|| view! { <span class="badge">"limited"</span> }
                >
                    <PermissionGate permission=SETTINGS_MANAGE>
                        <span class="badge">"full access"</span>
                    </PermissionGate>
                </PermissionGate>
            </AuthGate>
        </nav>
    }
}
