use dioxus::prelude::*;
use edu_client::{PostListing, listing::empty_message};
use edu_types::CategoryFilter;

use crate::{
    Routes, app::auth::hooks::{use_auth, use_session}, components::{CategoryTabs, ErrorBanner, InfoBanner, Layout, LoadingSpinner, PostCard}
};

#[component]
pub fn BlogListPage(category: String) -> Element {
    let auth = use_auth();
    let session = use_session();
    let filter = CategoryFilter::from_query(&category);

    // Refetch when the category changes or someone logs in or out
    let listing = use_resource(use_reactive((&category,), move |(category,)| {
        let filter = CategoryFilter::from_query(&category);
        let logged_in = auth.read().is_authenticated();
        // Visitors browse anonymously even if a stale token is still stored
        let api = if logged_in { session.api() } else { session.api().with_bearer(None) };
        async move {
            let result = api.list_posts().await.map(|resp| PostListing::from_response(resp, &filter));
            if let Err(err) = &result {
                tracing::error!(error = %err, "failed to fetch posts");
            }
            result
        }
    }));

    let logged_in = auth.read().is_authenticated();

    rsx! {
        Layout {
            div { class: "sm:flex sm:items-center sm:justify-between mb-8",
                div {
                    h2 { class: "text-2xl font-bold", "Educational Blog Posts" }
                    p { class: "mt-1 text-sm text-base-content/60", "Explore our collection of educational content" }
                }
                if logged_in {
                    Link { to: Routes::CreatePostPage {}, class: "btn btn-primary mt-4 sm:mt-0", "Create New Post" }
                }
            }

            CategoryTabs { active: filter.clone() }

            match listing() {
                None => rsx! { LoadingSpinner {} },
                Some(Err(err)) => rsx! {
                    ErrorBanner { message: err.user_message("Failed to fetch posts. Please try again later.") }
                },
                Some(Ok(listing)) => rsx! {
                    if let Some(banner) = listing.banner() {
                        InfoBanner { message: banner }
                    }

                    div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                        for post in listing.posts.iter().cloned() {
                            PostCard { key: "{post.id}", post, logged_in }
                        }
                    }

                    if listing.is_empty() {
                        div { class: "text-center py-10",
                            p { class: "text-lg text-base-content/60", "{empty_message(&filter)}" }
                            if logged_in {
                                Link { to: Routes::CreatePostPage {}, class: "link link-primary mt-4 inline-block", "Create the first post →" }
                            } else {
                                p { class: "mt-8",
                                    Link { to: Routes::LoginPage {}, class: "link link-primary", "Log in" }
                                    " or "
                                    Link { to: Routes::SignupPage {}, class: "link link-primary", "sign up" }
                                    " to create your own posts!"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
