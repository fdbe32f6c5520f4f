use dioxus::prelude::*;

use crate::app::{auth::context::AuthProvider, routes::AppRouter};

const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const DAISYUI: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

/// Root shell: wraps the router and global providers.
#[component]
pub fn app_root() -> Element {
    rsx! {
        document::Title { "EduBlog" }
        document::Stylesheet { href: DAISYUI }
        document::Script { src: TAILWIND_BROWSER }
        document::Stylesheet { href: asset!("/assets/main.css") }
        div {
            AuthProvider { AppRouter {} }
        }
    }
}
