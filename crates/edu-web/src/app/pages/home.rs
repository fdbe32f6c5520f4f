use dioxus::prelude::*;

use crate::{
    Routes, app::auth::hooks::use_auth, components::Layout
};

#[component]
pub fn HomePage() -> Element {
    let auth = use_auth();
    let greeting = auth.read().username().map(|name| format!("Welcome back, {name}"));

    rsx! {
        Layout {
            div { class: "hero min-h-[60vh] bg-base-200 rounded-box",
                div { class: "hero-content text-center",
                    div { class: "max-w-xl",
                        h1 { class: "text-5xl font-bold text-primary", "EduBlog" }
                        if let Some(greeting) = greeting {
                            p { class: "pt-4 text-lg font-semibold", "{greeting}" }
                        }
                        p { class: "py-6",
                            "Educational writing from teachers and learners: mathematics, science, programming, history and literature."
                        }
                        div { class: "flex justify-center gap-2",
                            Link { to: Routes::blogs(), class: "btn btn-primary", "Browse posts" }
                            if auth.read().is_authenticated() {
                                Link { to: Routes::CreatePostPage {}, class: "btn btn-outline", "Write a post" }
                            } else {
                                Link { to: Routes::SignupPage {}, class: "btn btn-outline", "Join EduBlog" }
                            }
                        }
                    }
                }
            }
        }
    }
}
