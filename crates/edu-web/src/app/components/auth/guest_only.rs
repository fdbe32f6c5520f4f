use dioxus::prelude::*;
use edu_client::{GuardDecision, require_guest};

use crate::{app::auth::hooks::use_auth, components::LoadingSpinner};

/// Inverse of [`RequireAuth`](super::RequireAuth) for the login and signup
/// views: an authenticated user is sent on to the blog index.
#[component]
pub fn GuestOnly(children: Element) -> Element {
    let auth = use_auth();
    let nav = navigator();

    use_effect(move || {
        if let GuardDecision::Redirect(target) = require_guest(&auth.read()) {
            nav.push(target);
        }
    });

    let decision = require_guest(&auth.read());
    match decision {
        GuardDecision::Pending => rsx! { LoadingSpinner { full_screen: true } },
        GuardDecision::Redirect(_) => rsx! { div {} },
        GuardDecision::Allow => rsx! { {children} },
    }
}
