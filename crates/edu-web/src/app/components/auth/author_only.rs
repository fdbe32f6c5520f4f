use dioxus::prelude::*;
use edu_client::can_modify;
use edu_types::Post;

use crate::app::auth::hooks::use_auth;

/// Shows children only to the author of `post`.
///
/// Purely cosmetic; the backend rejects edits and deletes from anyone else.
///
/// # Examples
///
/// ```text
/// rsx! {
///     AuthorOnly {
///         post: post.clone(),
///         button { class: "btn btn-error", "Delete" }
///     }
/// }
/// ```
#[component]
pub fn AuthorOnly(
    post: Post,

    /// Content to show to the author
    children: Element,
) -> Element {
    let auth = use_auth();
    let is_author = can_modify(&auth.read(), &post);

    rsx! {
        if is_author {
            {children}
        }
    }
}
