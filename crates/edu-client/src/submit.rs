//! Where the create and edit forms go once the backend has answered.

use crate::error::ClientResult;

/// Blog index, where a new post is listed.
pub const AFTER_CREATE_ROUTE: &str = "/blogs";
pub const CREATE_FAILED: &str = "Failed to create post";
pub const UPDATE_FAILED: &str = "Failed to update post. Please try again.";

/// Detail view path for a post.
pub fn post_route(id: i64) -> String {
    format!("/blogs/{}", id)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Leave the form for this path.
    Navigate(String),
    /// Stay on the form, showing this message.
    Stay(String),
}

pub fn after_create<T>(result: &ClientResult<T>) -> SubmitOutcome {
    match result {
        Ok(_) => SubmitOutcome::Navigate(AFTER_CREATE_ROUTE.to_string()),
        Err(err) => SubmitOutcome::Stay(err.user_message(CREATE_FAILED)),
    }
}

/// A saved edit returns to the post it changed.
pub fn after_update<T>(id: i64, result: &ClientResult<T>) -> SubmitOutcome {
    match result {
        Ok(_) => SubmitOutcome::Navigate(post_route(id)),
        Err(err) => SubmitOutcome::Stay(err.user_message(UPDATE_FAILED)),
    }
}
