use dioxus::prelude::*;

use crate::pages::{
    AboutPage, BlogListPage, BlogPostPage, CreatePostPage, DashboardPage, EditPostPage, HomePage, LoginPage, NotFoundPage, SignupPage
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Routes {
    #[route("/")]
    HomePage {},
    #[route("/about")]
    AboutPage {},
    #[route("/login")]
    LoginPage {},
    #[route("/signup")]
    SignupPage {},
    #[route("/blogs?:category")]
    BlogListPage { category: String },
    // Static segments before `:id`
    #[route("/blogs/create")]
    CreatePostPage {},
    #[route("/blogs/edit/:id")]
    EditPostPage { id: i64 },
    #[route("/blogs/:id")]
    BlogPostPage { id: i64 },
    #[route("/dashboard")]
    DashboardPage {},
    #[route("/:..route")]
    NotFoundPage { route: Vec<String> },
}

impl Routes {
    /// Blog index, unfiltered.
    pub fn blogs() -> Self {
        Routes::BlogListPage { category: String::new() }
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
