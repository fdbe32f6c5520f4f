use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the blog backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// 401 - missing, expired or rejected credentials
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// 403 - authenticated but not allowed (e.g. editing someone else's post)
    #[error("forbidden")]
    Forbidden { message: Option<String> },

    /// 400 / 422 - the backend rejected the submitted data
    #[error("validation failed")]
    Validation { message: Option<String> },

    /// 404
    #[error("not found")]
    NotFound { message: Option<String> },

    /// Any other non-success status
    #[error("server error ({status})")]
    Server { status: u16, message: Option<String> },

    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Token persistence failed
    #[error("storage error: {0}")]
    Storage(String),

    /// Base URL or path could not be parsed
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Classify a non-success response. `message` is the body's `message` field, if any.
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized { message },
            StatusCode::FORBIDDEN => ClientError::Forbidden { message },
            StatusCode::NOT_FOUND => ClientError::NotFound { message },
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation { message },
            other => ClientError::Server {
                status: other.as_u16(),
                message,
            },
        }
    }

    /// Message supplied by the backend in the error body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized { message }
            | ClientError::Forbidden { message }
            | ClientError::Validation { message }
            | ClientError::NotFound { message }
            | ClientError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for an inline error banner: the backend's message when it sent one,
    /// otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Whether the stored credential should be treated as dead.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(ClientError::from_status(StatusCode::UNAUTHORIZED, None).is_auth_failure());
        assert!(matches!(
            ClientError::from_status(StatusCode::UNPROCESSABLE_ENTITY, None),
            ClientError::Validation { .. }
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, None),
            ClientError::NotFound { .. }
        ));
        assert_eq!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, None),
            ClientError::Server { status: 502, message: None }
        );
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, Some("Title too long".into()));
        assert_eq!(err.user_message("Failed to create post"), "Title too long");

        let err = ClientError::from_status(StatusCode::BAD_REQUEST, Some("  ".into()));
        assert_eq!(err.user_message("Failed to create post"), "Failed to create post");

        let err = ClientError::Network("connection refused".into());
        assert_eq!(err.user_message("Login failed"), "Login failed");
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
