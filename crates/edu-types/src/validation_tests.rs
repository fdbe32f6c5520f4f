//! Unit tests for form validation.

use super::*;
use crate::post::Author;

fn filled_form() -> PostForm {
    PostForm {
        title: "Ohm's law".into(),
        category: "SCIENCE".into(),
        description: "Voltage, current, resistance".into(),
        content: "V = IR".into(),
        image_url: String::new(),
    }
}

#[test]
fn test_post_form_required_fields() {
    let errors = PostForm::default().validate();
    for field in ["title", "category", "description", "content"] {
        assert_eq!(errors.get(field), Some(&ValidationError::Required), "{field}");
    }
    assert!(!errors.contains_key("imageUrl"));

    // Whitespace-only counts as empty
    let form = PostForm {
        title: "   ".into(),
        ..filled_form()
    };
    assert_eq!(form.validate().get("title"), Some(&ValidationError::Required));

    assert!(filled_form().validate().is_empty());
}

#[test]
fn test_post_form_required_inputs_match_validation() {
    let errors = PostForm::default().validate();
    for field in PostForm::FIELDS {
        assert_eq!(PostForm::is_required(field), errors.contains_key(field), "{field}");
    }
    assert!(!PostForm::is_required("imageUrl"));
    assert!(!PostForm::is_required("nonsense"));
}

#[test]
fn test_post_form_rejects_unknown_category() {
    let form = PostForm {
        category: "ASTROLOGY".into(),
        ..filled_form()
    };
    let errors = form.validate();
    assert!(matches!(errors.get("category"), Some(ValidationError::Other(_))));
    assert!(form.to_request().is_err());
}

#[test]
fn test_post_form_set_by_field_name() {
    let mut form = PostForm::default();
    for field in PostForm::FIELDS {
        form.set(field, format!("{field}-value")).unwrap();
        assert_eq!(form.get(field), Some(format!("{field}-value").as_str()));
    }
    assert_eq!(form.set("author", "mallory"), Err(ValidationError::UnknownField));
    assert_eq!(form.get("author"), None);
}

#[test]
fn test_post_form_to_request() {
    let request = filled_form().to_request().unwrap();
    assert_eq!(request.category, Category::Science);
    assert_eq!(request.image_url, None);

    let form = PostForm {
        image_url: "  https://img.example/ohm.png ".into(),
        ..filled_form()
    };
    assert_eq!(form.to_request().unwrap().image_url.as_deref(), Some("https://img.example/ohm.png"));
}

#[test]
fn test_post_form_prefill_from_post() {
    let mut post = Post {
        id: 3,
        title: "Iliad".into(),
        category: Some(Category::Literature),
        description: "Rage".into(),
        content: "Sing, goddess".into(),
        author: Some(Author { username: "homer".into() }),
        created_at: None,
        likes: 0,
        liked_by: Vec::new(),
        image_url: None,
    };
    let form = PostForm::from_post(&post);
    assert_eq!(form.category, "LITERATURE");
    assert_eq!(form.title, "Iliad");
    assert_eq!(form.image_url, "");

    post.category = None;
    assert_eq!(PostForm::from_post(&post).category, "MATHEMATICS");
}

#[test]
fn test_login_validation() {
    let errors = LoginRequest {
        username: " ".into(),
        password: String::new(),
    }
    .validate();
    assert_eq!(errors.len(), 2);

    let errors = LoginRequest {
        username: "ada".into(),
        password: " ".into(),
    }
    .validate();
    assert!(errors.is_empty());
}

#[test]
fn test_signup_validation() {
    let ok = SignupRequest {
        username: "ada".into(),
        email: "ada@example.com".into(),
        password: "secret".into(),
    };
    assert!(ok.validate().is_empty());

    let bad_email = SignupRequest {
        email: "ada.example.com".into(),
        ..ok.clone()
    };
    assert!(matches!(bad_email.validate().get("email"), Some(ValidationError::InvalidFormat(_))));

    let empty_email = SignupRequest { email: String::new(), ..ok };
    assert_eq!(empty_email.validate().get("email"), Some(&ValidationError::Required));
}

#[test]
fn test_format_errors_is_stable() {
    let errors = PostForm::default().validate();
    assert_eq!(
        format_errors(&errors),
        "category: This field is required, content: This field is required, description: This field is required, title: This field is required"
    );
}
