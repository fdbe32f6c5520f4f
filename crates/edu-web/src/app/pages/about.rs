use dioxus::prelude::*;

use crate::components::Layout;

const CONTACT_EMAIL: &str = "contact@edublog.com";

const SECTIONS: [(&str, &str); 4] = [
    (
        "Our Mission",
        "An inclusive space where educators and learners share knowledge, experience and insight across academic disciplines.",
    ),
    (
        "What We Offer",
        "Educational content spanning mathematics, science, programming, literature and more, written by our community.",
    ),
    (
        "Community",
        "Educators, students and lifelong learners committed to sharing knowledge and academic discussion.",
    ),
    (
        "Get Involved",
        "Create an account to publish your own posts and engage with what others have written.",
    ),
];

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Layout {
            div { class: "text-center",
                h2 { class: "text-sm font-semibold tracking-wide uppercase text-primary", "About Us" }
                p { class: "mt-2 text-3xl font-extrabold", "Welcome to EduBlog" }
                p { class: "mt-4 max-w-2xl mx-auto text-lg text-base-content/70",
                    "A platform dedicated to sharing educational content and fostering knowledge exchange."
                }
            }

            div { class: "mt-12 grid gap-8 md:grid-cols-2",
                for (title, body) in SECTIONS {
                    div { key: "{title}",
                        h3 { class: "text-lg font-medium", "{title}" }
                        p { class: "mt-2 text-base-content/70", "{body}" }
                    }
                }
            }

            div { class: "mt-12 card bg-primary/10",
                div { class: "card-body",
                    h3 { class: "card-title", "Contact Us" }
                    p {
                        "Questions or suggestions? Reach us at "
                        a { class: "link", href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                    }
                }
            }
        }
    }
}
