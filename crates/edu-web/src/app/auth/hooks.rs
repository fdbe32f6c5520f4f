use dioxus::prelude::*;
use edu_client::{ApiClient, AuthState};

use super::context::WebSession;

/// Get current auth state from context
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Session manager for login/signup/logout.
pub fn use_session() -> WebSession {
    use_context::<WebSession>()
}

/// API client carrying the persisted token.
pub fn use_api() -> ApiClient {
    use_session().api()
}
