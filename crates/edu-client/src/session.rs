//! Client-side session: who is logged in and the token that proves it.

use edu_types::{AuthUser, LoginRequest, SignupRequest};
use tracing::{debug, info, warn};

use crate::{
    api::ApiClient, error::{ClientError, ClientResult}, token::TokenStore
};

/// Authentication state shared with every view.
#[derive(Clone, PartialEq, Debug)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    /// True until the persisted token has been checked on startup.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    pub fn authenticated(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// Startup validation has finished; views may fetch with the settled session.
    pub fn is_settled(&self) -> bool {
        !self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// Drives session transitions against the backend and the token store.
///
/// Every operation returns the next [`AuthState`]; holding and broadcasting it
/// is the caller's job.
#[derive(Clone, Debug)]
pub struct SessionManager<S> {
    api: ApiClient,
    store: S,
}

impl<S: TokenStore> SessionManager<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// API client carrying the persisted token, if any.
    pub fn api(&self) -> ApiClient {
        self.api.with_bearer(self.store.load())
    }

    /// Startup check of the persisted token. Any failure drops the token.
    pub async fn restore(&self) -> AuthState {
        let Some(token) = self.store.load() else {
            debug!("no persisted token, starting anonymous");
            return AuthState::anonymous();
        };

        match self.api.with_bearer(Some(token)).validate().await {
            Ok(user) => {
                info!(username = %user.username, "restored session");
                AuthState::authenticated(user)
            }
            Err(err) => {
                warn!(error = %err, "persisted token rejected, clearing");
                self.discard_token();
                AuthState::anonymous()
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AuthState> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&request).await?;
        self.store.save(&response.token)?;
        info!(username = %response.user.username, "logged in");
        Ok(AuthState::authenticated(response.user))
    }

    pub async fn signup(&self, username: &str, email: &str, password: &str) -> ClientResult<AuthState> {
        let request = SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.signup(&request).await?;
        self.store.save(&response.token)?;
        info!(username = %response.user.username, "signed up");
        Ok(AuthState::authenticated(response.user))
    }

    /// Local only; the backend keeps no session to end.
    pub fn logout(&self) -> AuthState {
        self.discard_token();
        AuthState::anonymous()
    }

    fn discard_token(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear persisted token");
        }
    }
}

/// Banner text for a failed login.
pub fn login_error_message(err: &ClientError) -> String {
    err.user_message("Login failed")
}

/// Banner text for a failed signup.
pub fn signup_error_message(err: &ClientError) -> String {
    err.user_message("Signup failed")
}
