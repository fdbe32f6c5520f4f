use dioxus::prelude::*;

use crate::{Routes, components::Layout};

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        Layout {
            div { class: "hero min-h-[50vh]",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-5xl font-bold", "404" }
                        p { class: "py-6", "Nothing lives at /{path}." }
                        Link { to: Routes::blogs(), class: "btn btn-primary", "Browse posts" }
                    }
                }
            }
        }
    }
}
