pub mod auth;
pub mod category_tabs;
pub mod confirm_dialog;
pub mod feedback;
pub mod footer;
pub mod layout;
pub mod navbar;
pub mod post_card;
pub mod post_form;

pub use auth::{AuthorOnly, GuestOnly, RequireAuth};
pub use category_tabs::CategoryTabs;
pub use confirm_dialog::ConfirmDialog;
pub use feedback::{ErrorBanner, InfoBanner, LoadingSpinner};
pub use footer::Footer;
pub use layout::Layout;
pub use navbar::NavBar;
pub use post_card::PostCard;
pub use post_form::PostFormFields;
