use std::{collections::HashMap, fmt};

use crate::{
    auth::{LoginRequest, SignupRequest}, post::{Category, Post, PostRequest}
};

/// Field-level validation errors shown next to form inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    InvalidFormat(String),
    UnknownField,
    Other(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            ValidationError::UnknownField => write!(f, "Unknown field"),
            ValidationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

pub type FieldErrors = HashMap<String, ValidationError>;

fn require(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), ValidationError::Required);
    }
}

impl LoginRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = HashMap::new();
        require(&mut errors, "username", &self.username);
        // Passwords are not trimmed; whitespace is a legitimate password.
        if self.password.is_empty() {
            errors.insert("password".to_string(), ValidationError::Required);
        }
        errors
    }
}

impl SignupRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = HashMap::new();
        require(&mut errors, "username", &self.username);
        require(&mut errors, "email", &self.email);
        if !errors.contains_key("email") && !looks_like_email(&self.email) {
            errors.insert("email".to_string(), ValidationError::InvalidFormat("expected name@domain".to_string()));
        }
        if self.password.is_empty() {
            errors.insert("password".to_string(), ValidationError::Required);
        }
        errors
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Create/edit form state keyed by input name, as bound to the form's inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostForm {
    pub title: String,
    /// Raw select value; empty until the author picks one.
    pub category: String,
    pub description: String,
    pub content: String,
    pub image_url: String,
}

impl PostForm {
    pub const FIELDS: [&'static str; 5] = ["title", "category", "description", "content", "imageUrl"];
    /// Inputs the browser must not submit empty; `imageUrl` is optional.
    pub const REQUIRED: [&'static str; 4] = ["title", "category", "description", "content"];

    pub fn is_required(field: &str) -> bool {
        Self::REQUIRED.contains(&field)
    }

    /// Prefill from an existing post. A post without a category starts on Mathematics.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            category: post.category.unwrap_or(Category::Mathematics).as_str().to_string(),
            description: post.description.clone(),
            content: post.content.clone(),
            image_url: post.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "category" => Some(&self.category),
            "description" => Some(&self.description),
            "content" => Some(&self.content),
            "imageUrl" => Some(&self.image_url),
            _ => None,
        }
    }

    /// Update one field by its input name.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), ValidationError> {
        let slot = match field {
            "title" => &mut self.title,
            "category" => &mut self.category,
            "description" => &mut self.description,
            "content" => &mut self.content,
            "imageUrl" => &mut self.image_url,
            _ => return Err(ValidationError::UnknownField),
        };
        *slot = value.into();
        Ok(())
    }

    /// Required-field and category checks, keyed by input name.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = HashMap::new();
        require(&mut errors, "title", &self.title);
        require(&mut errors, "description", &self.description);
        require(&mut errors, "content", &self.content);
        if self.category.trim().is_empty() {
            errors.insert("category".to_string(), ValidationError::Required);
        } else if let Err(e) = self.category.parse::<Category>() {
            errors.insert("category".to_string(), ValidationError::Other(e.to_string()));
        }
        errors
    }

    /// Build the request body, or the field errors that block it.
    pub fn to_request(&self) -> Result<PostRequest, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let category = self.category.parse::<Category>().map_err(|e| {
            HashMap::from([("category".to_string(), ValidationError::Other(e.to_string()))])
        })?;
        let image_url = self.image_url.trim();
        Ok(PostRequest {
            title: self.title.trim().to_string(),
            category,
            description: self.description.trim().to_string(),
            content: self.content.clone(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
        })
    }
}

/// Render a human-readable string from a map of validation errors.
pub fn format_errors(errors: &FieldErrors) -> String {
    let mut parts = errors.iter().map(|(k, v)| format!("{}: {}", k, v)).collect::<Vec<_>>();
    parts.sort();
    parts.join(", ")
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
