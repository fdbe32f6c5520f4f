use dioxus::prelude::*;
use edu_types::Post;

use crate::{
    Routes, app::auth::hooks::{use_auth, use_session}, components::{AuthorOnly, ConfirmDialog, ErrorBanner, Layout, LoadingSpinner, RequireAuth}
};

#[component]
pub fn BlogPostPage(id: i64) -> Element {
    rsx! {
        RequireAuth {
            Layout { BlogPostView { id } }
        }
    }
}

#[component]
fn BlogPostView(id: i64) -> Element {
    let auth = use_auth();
    let session = use_session();
    let navigator = use_navigator();

    let fetch_session = session.clone();
    let post = use_resource(use_reactive((&id,), move |(id,)| {
        let api = fetch_session.api();
        async move { api.get_post(id).await }
    }));

    // Latest copy returned by the like endpoint, shown in place of the fetched one
    let mut liked = use_signal(|| None::<Post>);
    let mut action_error = use_signal(|| None::<String>);
    let mut confirm_open = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut liking = use_signal(|| false);

    let like_session = session.clone();
    let on_like = move |_| {
        if liking() {
            return;
        }
        liking.set(true);
        let api = like_session.api();
        spawn(async move {
            match api.toggle_like(id).await {
                Ok(updated) => liked.set(Some(updated)),
                Err(err) => {
                    tracing::warn!(post_id = id, error = %err, "like toggle failed");
                    action_error.set(Some(err.user_message("Failed to update like")));
                }
            }
            liking.set(false);
        });
    };

    let delete_session = session.clone();
    let on_delete = move |_| {
        deleting.set(true);
        action_error.set(None);
        let api = delete_session.api();
        spawn(async move {
            match api.delete_post(id).await {
                Ok(()) => {
                    navigator.push(Routes::blogs());
                }
                Err(err) => {
                    tracing::error!(post_id = id, error = %err, "delete failed");
                    confirm_open.set(false);
                    deleting.set(false);
                    action_error.set(Some("Failed to delete post".to_string()));
                }
            }
        });
    };

    let username = auth.read().username().map(str::to_string);

    match post() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(err)) => {
            tracing::error!(post_id = id, error = %err, "failed to fetch post");
            rsx! {
                ErrorBanner { message: "Failed to fetch post" }
                Link { to: Routes::blogs(), class: "btn btn-ghost", "← Back to posts" }
            }
        }
        Some(Ok(fetched)) => {
            let post = liked().filter(|p| p.id == fetched.id).unwrap_or(fetched);
            let liked_by_me = username.as_deref().is_some_and(|name| post.is_liked_by(name));
            let like_class = if liked_by_me { "btn btn-sm btn-secondary" } else { "btn btn-sm btn-outline btn-secondary" };
            let category = post.category.map(|c| c.label()).unwrap_or("Uncategorized");
            let date = post.created_date().unwrap_or_default();

            rsx! {
                article { class: "max-w-4xl mx-auto card bg-base-100 shadow-xl overflow-hidden",
                    if let Some(image) = post.image_url.clone() {
                        figure { img { class: "w-full max-h-96 object-cover", src: "{image}", alt: "{post.title}" } }
                    }
                    div { class: "card-body",
                        div { class: "flex items-center justify-between text-sm",
                            span { class: "badge badge-primary", "{category}" }
                            span { class: "text-base-content/60", "{date}" }
                        }
                        h1 { class: "text-3xl font-bold mt-2", "{post.title}" }
                        p { class: "text-lg text-base-content/70", "{post.description}" }
                        p { class: "text-sm text-base-content/60", "By {post.author_name()}" }

                        if let Some(error) = action_error() {
                            ErrorBanner { message: error }
                        }

                        div { class: "edu-article mt-4",
                            for (i, paragraph) in post.paragraphs().into_iter().enumerate() {
                                p { key: "{i}", "{paragraph}" }
                            }
                        }

                        div { class: "card-actions items-center justify-between mt-6",
                            div { class: "flex items-center gap-2",
                                button {
                                    class: like_class,
                                    disabled: liking(),
                                    onclick: on_like,
                                    if liked_by_me { "♥ Liked" } else { "♡ Like" }
                                    span { class: "badge badge-sm", "{post.likes}" }
                                }
                                Link { to: Routes::blogs(), class: "btn btn-sm btn-ghost", "← Back to posts" }
                            }
                            AuthorOnly { post: post.clone(),
                                div { class: "flex gap-2",
                                    Link { to: Routes::EditPostPage { id: post.id }, class: "btn btn-sm btn-primary", "Edit" }
                                    button {
                                        class: "btn btn-sm btn-error",
                                        onclick: move |_| confirm_open.set(true),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }

                ConfirmDialog {
                    open: confirm_open(),
                    title: "Delete post",
                    message: "Are you sure you want to delete this post?",
                    busy: deleting(),
                    on_confirm: on_delete,
                    on_cancel: move |_| confirm_open.set(false),
                }
            }
        }
    }
}
