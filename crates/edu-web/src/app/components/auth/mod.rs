// Route guards and ownership-gated rendering

pub mod author_only;
pub mod guest_only;
pub mod require_auth;

pub use author_only::AuthorOnly;
pub use guest_only::GuestOnly;
pub use require_auth::RequireAuth;
