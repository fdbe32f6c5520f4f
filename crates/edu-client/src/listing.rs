//! Shaping of fetched post lists for the index and dashboard views.

use edu_types::{CategoryFilter, Post, PostListResponse};

/// What the blog index renders after a successful fetch.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PostListing {
    pub posts: Vec<Post>,
    /// Informational text from the backend (e.g. why the list is truncated).
    pub message: Option<String>,
    /// `(Showing n of m posts)` when the backend truncated the list.
    pub note: Option<String>,
}

impl PostListing {
    pub fn from_response(response: PostListResponse, filter: &CategoryFilter) -> Self {
        let note = response.showing_note();
        let message = response.message.filter(|m| !m.trim().is_empty());
        let posts = response.blogs.into_iter().filter(|p| filter.matches(p)).collect();
        Self { posts, message, note }
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Info line above the grid: the server message, followed by the note when
    /// the list was truncated. Nothing is shown without a message.
    pub fn banner(&self) -> Option<String> {
        let message = self.message.as_ref()?;
        Some(match &self.note {
            Some(note) => format!("{} {}", message, note),
            None => message.clone(),
        })
    }
}

/// Empty-state text for the index.
pub fn empty_message(filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "No posts available yet.".to_string(),
        other => format!("No posts found in the {} category.", other.as_query().to_lowercase()),
    }
}

/// Posts written by `username`, newest first when dates are comparable.
pub fn authored_by(posts: Vec<Post>, username: &str) -> Vec<Post> {
    let mut own: Vec<Post> = posts.into_iter().filter(|p| p.is_authored_by(username)).collect();
    own.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    own
}
