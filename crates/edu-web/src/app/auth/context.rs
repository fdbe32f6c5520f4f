use dioxus::prelude::*;
use edu_client::{ApiClient, AuthState, ClientConfig, SessionManager};

use crate::{app::storage::BrowserTokenStore, components::LoadingSpinner};

pub type WebSession = SessionManager<BrowserTokenStore>;

/// Build the session manager from the compiled-in backend configuration.
pub fn web_session(config: &ClientConfig) -> WebSession {
    SessionManager::new(ApiClient::new(config), BrowserTokenStore::new(config.token_key.clone()))
}

/// Initialize auth provider and validate any persisted token
pub fn use_auth_provider() -> Signal<AuthState> {
    let session = use_context_provider(|| web_session(&ClientConfig::default()));
    let mut auth = use_signal(AuthState::default);
    use_context_provider(|| auth);

    // Validate the stored token on mount
    use_effect(move || {
        let session = session.clone();
        spawn(async move {
            let restored = session.restore().await;
            auth.set(restored);
        });
    });

    auth
}

/// Makes the session available to everything below it. Nothing below mounts
/// until the persisted token has been checked, so views fetch once with the
/// settled session.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth = use_auth_provider();

    if !auth.read().is_settled() {
        return rsx! { LoadingSpinner { full_screen: true } };
    }

    children
}
