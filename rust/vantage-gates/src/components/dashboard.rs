//! Landing dashboard with role-specific content.

use leptos::prelude::*;
use vantage_rbac::permissions::{ANALYTICS_VIEW, CONTENT_EDIT, CONTENT_PUBLISH};
use vantage_rbac::{Access, Denial, Role};

use crate::{FeatureFlag, RoleCase, RoleSwitch, use_rbac};

/// Explains why the content editor is unavailable.
///
/// Tells anonymous visitors to sign in and signed-in visitors that they
/// lack the permission, instead of hiding the section silently.
#[component]
pub fn EditorNotice() -> impl IntoView {
    let rbac = use_rbac();

    move || match rbac.authorize(|snapshot| snapshot.authorize_permission(&CONTENT_EDIT)) {
        Access::Granted => view! { <p class="notice">"You can edit content."</p> }.into_any(),
        Access::Denied(Denial::Unauthenticated) => {
            view! { <p class="notice">"Sign in to edit content."</p> }.into_any()
        }
        Access::Denied(_) => {
            view! { <p class="notice">"Your account can not edit content."</p> }.into_any()
        }
    }
}

/// Role-specific dashboard.
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <section class="dashboard">
            <RoleSwitch
                cases=vec![
                    RoleCase::new(Role::Admin, || view! { <h2>"Admin overview"</h2> }),
                    RoleCase::new(Role::Moderator, || view! { <h2>"Review queue"</h2> }),
                    RoleCase::new(Role::User, || view! { <h2>"Your agents"</h2> }),
                    RoleCase::new(Role::Viewer, || view! { <h2>"Read-only preview"</h2> }),
                ]
                default_content=|| view! { <h2>"Book a strategy call"</h2> }
            />
            <FeatureFlag
                feature="analytics-panel"
                allowed_roles=vec![Role::Admin, Role::Moderator]
                required_permissions=vec![ANALYTICS_VIEW]
            >
                <div class="panel">"Traffic and lead analytics"</div>
            </FeatureFlag>
            <FeatureFlag
                feature="publishing"
                required_permissions=vec![CONTENT_PUBLISH]
                fallback=|| view! { <div class="panel muted">"Publishing is reserved for editors"</div> }
            >
                <div class="panel">"Publish drafts"</div>
            </FeatureFlag>
            <EditorNotice />
        </section>
    }
}
