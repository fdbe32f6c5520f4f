use dioxus::prelude::*;
use edu_client::{GuardDecision, require_auth};

use crate::{app::auth::hooks::use_auth, components::LoadingSpinner};

/// Route guard component that requires a logged-in user
///
/// Redirects to /login once startup validation has finished without a user.
/// Children are only mounted when allowed, so their data hooks never fire for
/// visitors.
///
/// # Examples
///
/// ```text
/// rsx! { RequireAuth { DashboardView {} } }
/// ```
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = navigator();

    // Redirect to login if not authenticated
    use_effect(move || {
        if let GuardDecision::Redirect(target) = require_auth(&auth.read()) {
            nav.push(target);
        }
    });

    let decision = require_auth(&auth.read());
    match decision {
        GuardDecision::Pending => rsx! { LoadingSpinner { full_screen: true } },
        GuardDecision::Redirect(_) => rsx! { div {} }, // Will redirect via effect
        GuardDecision::Allow => rsx! { {children} },
    }
}
