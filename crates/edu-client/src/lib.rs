//! Renderer-independent core of the EduBlog web client.
//!
//! Holds the typed REST client, token persistence seam, the session state
//! machine and the pure decisions the views derive from it. Nothing here knows
//! about Dioxus, so all of it is exercised by host-side tests.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod listing;
pub mod session;
pub mod submit;
pub mod token;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use guard::{GuardDecision, can_modify, require_auth, require_guest};
pub use listing::PostListing;
pub use session::{AuthState, SessionManager};
pub use submit::{SubmitOutcome, after_create, after_update};
pub use token::{MemoryTokenStore, TokenStore};
