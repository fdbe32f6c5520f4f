//! EduBlog web entrypoint and common exports.
//!
//! This crate hosts the Dioxus UI. Talking to the backend, session transitions
//! and route decisions live in `edu-client`; this crate wires them to signals,
//! context and the router.

pub mod app;
pub mod app_root;

pub use app::{components, pages, routes, routes::Routes};
