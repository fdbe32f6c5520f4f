use dioxus::prelude::*;
use edu_client::listing::authored_by;

use crate::{
    Routes, app::auth::hooks::{use_auth, use_session}, components::{ErrorBanner, Layout, LoadingSpinner, PostCard, RequireAuth}
};

#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        RequireAuth {
            Layout { DashboardView {} }
        }
    }
}

#[component]
fn DashboardView() -> Element {
    let auth = use_auth();
    let session = use_session();

    let username = auth.read().username().unwrap_or_default().to_string();

    let own_posts = use_resource(use_reactive((&username,), move |(username,)| {
        let api = session.api();
        async move { api.all_posts().await.map(|posts| authored_by(posts, &username)) }
    }));

    rsx! {
        div { class: "sm:flex sm:items-center sm:justify-between mb-8",
            div {
                h2 { class: "text-2xl font-bold", "Dashboard" }
                p { class: "mt-1 text-sm text-base-content/60", "Posts written by {username}" }
            }
            Link { to: Routes::CreatePostPage {}, class: "btn btn-primary mt-4 sm:mt-0", "Create New Post" }
        }

        match own_posts() {
            None => rsx! { LoadingSpinner {} },
            Some(Err(err)) => rsx! {
                ErrorBanner { message: err.user_message("Failed to fetch your posts. Please try again later.") }
            },
            Some(Ok(posts)) if posts.is_empty() => rsx! {
                div { class: "text-center py-10",
                    p { class: "text-lg text-base-content/60", "You have not written any posts yet." }
                    Link { to: Routes::CreatePostPage {}, class: "link link-primary mt-4 inline-block", "Write your first post →" }
                }
            },
            Some(Ok(posts)) => rsx! {
                div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                    for post in posts {
                        PostCard { key: "{post.id}", post, logged_in: true, show_edit: true }
                    }
                }
            },
        }
    }
}
