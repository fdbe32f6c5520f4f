//! Unit tests for post wire types.

use serde_json::json;

use super::*;

fn sample_post() -> Post {
    serde_json::from_value(json!({
        "id": 12,
        "title": "Fourier series",
        "category": "MATHEMATICS",
        "description": "Periodic functions as sums of sines",
        "content": "First paragraph.\n\nSecond paragraph.\n\n\n\nThird.",
        "author": { "username": "ada" },
        "createdAt": "2024-03-05T14:22:10.123",
        "likes": 2,
        "likedBy": ["grace", { "username": "alan" }]
    }))
    .unwrap()
}

#[test]
fn post_decodes_backend_shape() {
    let post = sample_post();
    assert_eq!(post.id, 12);
    assert_eq!(post.category, Some(Category::Mathematics));
    assert_eq!(post.author_name(), "ada");
    assert_eq!(post.likes, 2);
    assert!(post.is_liked_by("grace"));
    assert!(post.is_liked_by("alan"));
    assert!(!post.is_liked_by("ada"));
    assert_eq!(post.image_url, None);
}

#[test]
fn post_without_author_is_anonymous_and_owned_by_nobody() {
    let post: Post = serde_json::from_value(json!({ "id": 1, "title": "Untitled" })).unwrap();
    assert_eq!(post.author_name(), "Anonymous");
    assert!(!post.is_authored_by("Anonymous"));
    assert!(!post.is_authored_by(""));
    assert!(post.liked_by.is_empty());
}

#[test]
fn authorship_is_exact_username_match() {
    let post = sample_post();
    assert!(post.is_authored_by("ada"));
    assert!(!post.is_authored_by("Ada"));
    assert!(!post.is_authored_by("grace"));
}

#[test]
fn paragraphs_split_on_blank_lines() {
    assert_eq!(sample_post().paragraphs(), vec!["First paragraph.", "Second paragraph.", "Third."]);
}

#[test]
fn created_date_accepts_backend_formats() {
    let mut post = sample_post();
    assert_eq!(post.created_date().as_deref(), Some("2024-03-05"));

    post.created_at = Some("2024-03-05T14:22:10Z".into());
    assert_eq!(post.created_date().as_deref(), Some("2024-03-05"));

    post.created_at = Some("2024-03-05".into());
    assert_eq!(post.created_date().as_deref(), Some("2024-03-05"));

    post.created_at = Some("yesterday".into());
    assert_eq!(post.created_date().as_deref(), Some("yesterday"));

    post.created_at = None;
    assert_eq!(post.created_date(), None);
}

#[test]
fn category_parsing_and_labels() {
    assert_eq!("SCIENCE".parse::<Category>(), Ok(Category::Science));
    assert_eq!("history".parse::<Category>(), Ok(Category::History));
    assert!("ASTROLOGY".parse::<Category>().is_err());
    assert_eq!(Category::General.label(), "General");
    assert_eq!(serde_json::to_value(Category::Programming).unwrap(), json!("PROGRAMMING"));
}

#[test]
fn category_filter_from_query() {
    assert_eq!(CategoryFilter::from_query(""), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_query("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_query("LITERATURE"), CategoryFilter::Only(Category::Literature));
    assert_eq!(CategoryFilter::Only(Category::Science).as_query(), "SCIENCE");

    let post = sample_post();
    assert!(CategoryFilter::All.matches(&post));
    assert!(CategoryFilter::Only(Category::Mathematics).matches(&post));
    assert!(!CategoryFilter::Only(Category::Science).matches(&post));
}

#[test]
fn unknown_or_miscased_category_matches_nothing() {
    let post = sample_post();

    let unknown = CategoryFilter::from_query("science-fiction");
    assert_eq!(unknown, CategoryFilter::Other("science-fiction".to_string()));
    assert_eq!(unknown.as_query(), "science-fiction");
    assert!(!unknown.matches(&post));

    // Query values are wire names, compared exactly
    let lowercase = CategoryFilter::from_query("mathematics");
    assert_eq!(lowercase, CategoryFilter::Other("mathematics".to_string()));
    assert!(!lowercase.matches(&post));
}

#[test]
fn null_fields_decode_as_empty() {
    let post: Post = serde_json::from_value(json!({
        "id": 3,
        "title": null,
        "category": null,
        "description": null,
        "content": null,
        "author": null,
        "createdAt": null,
        "likes": null,
        "likedBy": null,
        "imageUrl": null
    }))
    .unwrap();
    assert_eq!(post.title, "");
    assert_eq!(post.description, "");
    assert!(post.paragraphs().is_empty());
    assert_eq!(post.likes, 0);
    assert!(post.liked_by.is_empty());
    assert_eq!(post.author_name(), "Anonymous");
}

#[test]
fn one_sparse_post_does_not_sink_the_listing() {
    let response: PostListResponse = serde_json::from_value(json!({
        "blogs": [
            { "id": 1, "title": "Complete", "description": "d", "content": "c", "likes": 1, "likedBy": [] },
            { "id": 2, "title": "Sparse", "description": null, "content": null, "likedBy": null }
        ],
        "message": null,
        "total": 2,
        "showing": 2
    }))
    .unwrap();
    assert_eq!(response.blogs.len(), 2);
    assert_eq!(response.blogs[1].description, "");

    let empty: PostListResponse = serde_json::from_value(json!({ "blogs": null })).unwrap();
    assert!(empty.blogs.is_empty());
}

#[test]
fn post_request_uses_camel_case_and_omits_missing_image() {
    let request = PostRequest {
        title: "T".into(),
        category: Category::General,
        description: "D".into(),
        content: "C".into(),
        image_url: None,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "title": "T", "category": "GENERAL", "description": "D", "content": "C" })
    );

    let request = PostRequest {
        image_url: Some("https://img.example/x.png".into()),
        ..request
    };
    assert_eq!(serde_json::to_value(&request).unwrap()["imageUrl"], json!("https://img.example/x.png"));
}

#[test]
fn list_response_showing_note() {
    let response: PostListResponse = serde_json::from_value(json!({
        "blogs": [],
        "message": "Log in to see everything",
        "total": 40,
        "showing": 10
    }))
    .unwrap();
    assert_eq!(response.showing_note().as_deref(), Some("(Showing 10 of 40 posts)"));

    let complete = PostListResponse {
        total: Some(3),
        showing: Some(3),
        ..Default::default()
    };
    assert_eq!(complete.showing_note(), None);
    assert_eq!(PostListResponse::default().showing_note(), None);
}
