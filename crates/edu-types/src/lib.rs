//! Shared type definitions for EduBlog
//!
//! This crate contains the lightweight wire types exchanged with the blog
//! backend. They are used by both the host-side client code and the WASM web
//! application, so nothing here may depend on a renderer or an HTTP stack.

pub mod auth;
pub mod post;
pub mod validation;

pub use auth::{AuthResponse, AuthUser, LoginRequest, SignupRequest};
pub use post::{Author, Category, CategoryFilter, Post, PostListResponse, PostRequest};
pub use validation::{FieldErrors, PostForm, ValidationError};
