use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer footer-center bg-base-200 text-base-content p-4",
            aside {
                p { "EduBlog - sharing knowledge across every discipline" }
            }
        }
    }
}
