use dioxus::prelude::*;
use edu_types::Post;

use crate::Routes;

/// Summary card used by the index and the dashboard.
///
/// Visitors are sent to the login page by "Read more" since the detail view
/// needs a session.
#[component]
pub fn PostCard(post: Post, logged_in: bool, #[props(default)] show_edit: bool) -> Element {
    let category = post.category.map(|c| c.label()).unwrap_or("Uncategorized");
    let date = post.created_date().unwrap_or_default();
    let read_more = if logged_in { Routes::BlogPostPage { id: post.id } } else { Routes::LoginPage {} };

    rsx! {
        div { class: "card bg-base-100 shadow hover:shadow-lg transition-shadow duration-300",
            div { class: "card-body",
                div { class: "flex items-center justify-between text-sm",
                    span { class: "badge badge-primary badge-outline", "{category}" }
                    span { class: "text-base-content/60", "{date}" }
                }
                Link { to: Routes::BlogPostPage { id: post.id },
                    h3 { class: "card-title hover:text-primary", "{post.title}" }
                }
                p { class: "edu-card-description text-base-content/70", "{post.description}" }
                div { class: "card-actions items-center justify-between mt-2",
                    span { class: "text-sm text-base-content/60", "By {post.author_name()}" }
                    div { class: "flex gap-2",
                        if show_edit {
                            Link { class: "btn btn-sm btn-ghost", to: Routes::EditPostPage { id: post.id }, "Edit" }
                        }
                        Link { class: "btn btn-sm btn-link", to: read_more, "Read more →" }
                    }
                }
            }
        }
    }
}
