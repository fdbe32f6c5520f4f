use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Subject area a post is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Mathematics,
    Science,
    Programming,
    History,
    Literature,
    General,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Mathematics,
        Category::Science,
        Category::Programming,
        Category::History,
        Category::Literature,
        Category::General,
    ];

    /// Wire value, e.g. `MATHEMATICS`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mathematics => "MATHEMATICS",
            Category::Science => "SCIENCE",
            Category::Programming => "PROGRAMMING",
            Category::History => "HISTORY",
            Category::Literature => "LITERATURE",
            Category::General => "GENERAL",
        }
    }

    /// Human-facing label, e.g. `Mathematics`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Mathematics => "Mathematics",
            Category::Science => "Science",
            Category::Programming => "Programming",
            Category::History => "History",
            Category::Literature => "Literature",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category selection on the list view, driven by the `?category=` query.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// A query value naming no category. Kept verbatim; matches no post.
    Other(String),
}

impl CategoryFilter {
    /// Parse the query value. Empty and `all` select everything; otherwise the
    /// value must be a category's exact wire name.
    pub fn from_query(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            return CategoryFilter::All;
        }
        match Category::ALL.into_iter().find(|c| c.as_str() == value) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Other(value.to_string()),
        }
    }

    /// Query value that round-trips through [`CategoryFilter::from_query`].
    pub fn as_query(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
            CategoryFilter::Other(raw) => raw,
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == Some(*category),
            CategoryFilter::Other(_) => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
}

/// Entry of a post's `likedBy` list. The backend has sent both bare usernames
/// and user objects here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Liker {
    Username(String),
    User(Author),
}

impl Liker {
    pub fn username(&self) -> &str {
        match self {
            Liker::Username(name) => name,
            Liker::User(author) => &author.username,
        }
    }
}

/// Missing and `null` both decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Markdown or HTML body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub liked_by: Vec<Liker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Post {
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map(|a| a.username.as_str()).unwrap_or("Anonymous")
    }

    /// Whether `username` wrote this post. Posts without an author belong to nobody.
    pub fn is_authored_by(&self, username: &str) -> bool {
        self.author.as_ref().is_some_and(|a| a.username == username)
    }

    pub fn is_liked_by(&self, username: &str) -> bool {
        self.liked_by.iter().any(|l| l.username() == username)
    }

    /// Body split into paragraphs on blank lines.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Creation date as `YYYY-MM-DD`, or the raw value if it does not parse.
    pub fn created_date(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        Some(parse_date(raw).map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| raw.to_string()))
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Body of `POST /api/posts` and `PUT /api/posts/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Envelope returned by `GET /api/v1/posts`.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PostListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub blogs: Vec<Post>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub showing: Option<u64>,
}

impl PostListResponse {
    /// `(Showing n of m posts)` when the server truncated the listing.
    pub fn showing_note(&self) -> Option<String> {
        let total = self.total.unwrap_or(0);
        let showing = self.showing.unwrap_or(0);
        (total > showing).then(|| format!("(Showing {} of {} posts)", showing, total))
    }
}

#[cfg(test)]
#[path = "post_tests.rs"]
mod tests;
