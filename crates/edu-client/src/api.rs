//! Typed wrappers around the blog backend's REST endpoints.

use edu_types::{AuthResponse, AuthUser, LoginRequest, Post, PostListResponse, PostRequest, SignupRequest};
use reqwest::{Method, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::ClientConfig, error::{ClientError, ClientResult}
};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const VALIDATE_PATH: &str = "/api/auth/validate";
pub const POSTS_PATH: &str = "/api/posts";
pub const POSTS_LISTING_PATH: &str = "/api/v1/posts";

pub fn post_path(id: i64) -> String {
    format!("{}/{}", POSTS_PATH, id)
}

pub fn like_path(id: i64) -> String {
    format!("{}/{}/like", POSTS_PATH, id)
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// REST client for the blog backend.
///
/// Cheap to clone; the underlying connection pool is shared. A client built
/// with [`ApiClient::with_bearer`] sends `Authorization: Bearer <token>` on
/// every request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    /// Always ends in `/` so endpoint paths join under any prefix.
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let mut base_url = config.base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            bearer: None,
        }
    }

    /// Same client, authenticating as `token` (or anonymously for `None`).
    pub fn with_bearer(&self, token: Option<String>) -> Self {
        Self {
            bearer: token.filter(|t| !t.is_empty()),
            ..self.clone()
        }
    }

    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    pub fn url(&self, path: &str) -> ClientResult<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        debug!(%method, path, authenticated = self.bearer.is_some(), "api request");
        let mut builder = self.http.request(method, self.url(path)?);
        if let Some(token) = &self.bearer {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn execute(&self, builder: RequestBuilder) -> ClientResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body).ok().and_then(|b| b.message);
        warn!(status = status.as_u16(), message = message.as_deref().unwrap_or(""), "api request failed");
        Err(ClientError::from_status(status, message))
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = self.execute(builder).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Like [`ApiClient::fetch`], but a success with an empty or unexpected body is still a success.
    async fn fetch_optional<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<Option<T>> {
        let response = self.execute(builder).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!(error = %e, "ignoring undecodable success body");
                Ok(None)
            }
        }
    }

    // ---- auth ----

    pub async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        self.fetch(self.request(Method::POST, LOGIN_PATH)?.json(request)).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<AuthResponse> {
        self.fetch(self.request(Method::POST, SIGNUP_PATH)?.json(request)).await
    }

    /// Resolve the bearer token to its user.
    pub async fn validate(&self) -> ClientResult<AuthUser> {
        if self.bearer.is_none() {
            return Err(ClientError::Unauthorized { message: None });
        }
        self.fetch(self.request(Method::GET, VALIDATE_PATH)?).await
    }

    // ---- posts ----

    /// Listing envelope used by the blog index.
    pub async fn list_posts(&self) -> ClientResult<PostListResponse> {
        self.fetch(self.request(Method::GET, POSTS_LISTING_PATH)?).await
    }

    /// Bare array of every post.
    pub async fn all_posts(&self) -> ClientResult<Vec<Post>> {
        self.fetch(self.request(Method::GET, POSTS_PATH)?).await
    }

    pub async fn get_post(&self, id: i64) -> ClientResult<Post> {
        self.fetch(self.request(Method::GET, &post_path(id))?).await
    }

    pub async fn create_post(&self, request: &PostRequest) -> ClientResult<Option<Post>> {
        self.fetch_optional(self.request(Method::POST, POSTS_PATH)?.json(request)).await
    }

    pub async fn update_post(&self, id: i64, request: &PostRequest) -> ClientResult<Option<Post>> {
        self.fetch_optional(self.request(Method::PUT, &post_path(id))?.json(request)).await
    }

    pub async fn delete_post(&self, id: i64) -> ClientResult<()> {
        self.execute(self.request(Method::DELETE, &post_path(id))?).await?;
        Ok(())
    }

    /// Like or unlike as the bearer; returns the post with updated counts.
    pub async fn toggle_like(&self, id: i64) -> ClientResult<Post> {
        self.fetch(self.request(Method::POST, &like_path(id))?).await
    }
}
