use url::Url;

use crate::error::ClientResult;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Local-storage key the bearer token is persisted under.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Environment variable naming the backend base URL. Read at compile time for
/// WASM builds and at run time by [`ClientConfig::from_env`].
pub const API_URL_ENV: &str = "EDUBLOG_API_URL";

/// Top-level configuration for the REST client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend; request paths are joined onto it.
    /// Parsed per request, so a bad compiled-in value surfaces as
    /// [`ClientError::InvalidUrl`](crate::ClientError::InvalidUrl).
    pub base_url: String,
    pub token_key: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        })
    }

    pub fn parsed_base_url(&self) -> ClientResult<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Base URL from `EDUBLOG_API_URL` at run time, falling back to [`Default`].
    pub fn from_env() -> ClientResult<Self> {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let base_url = option_env!("EDUBLOG_API_URL")
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self {
            base_url: base_url.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}
