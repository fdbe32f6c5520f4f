//! Route access decisions derived from the session.

use edu_types::Post;

use crate::session::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
/// Where a freshly authenticated user lands.
pub const AFTER_LOGIN_ROUTE: &str = "/blogs";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup validation still running; show a spinner.
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Protected views: only a logged-in user gets through.
pub fn require_auth(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Login and signup views: a logged-in user is sent on.
pub fn require_guest(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Redirect(AFTER_LOGIN_ROUTE)
    } else {
        GuardDecision::Allow
    }
}

/// Whether edit/delete controls are shown for `post`. Display only; the
/// backend enforces ownership on every mutation.
pub fn can_modify(state: &AuthState, post: &Post) -> bool {
    state.username().is_some_and(|name| post.is_authored_by(name))
}

#[cfg(test)]
mod tests {
    use edu_types::{Author, AuthUser};

    use super::*;

    fn post_by(author: Option<&str>) -> Post {
        Post {
            id: 1,
            title: "t".into(),
            category: None,
            description: String::new(),
            content: String::new(),
            author: author.map(|a| Author { username: a.into() }),
            created_at: None,
            likes: 0,
            liked_by: Vec::new(),
            image_url: None,
        }
    }

    #[test]
    fn protected_routes_redirect_anonymous_users() {
        assert_eq!(require_auth(&AuthState::default()), GuardDecision::Pending);
        assert_eq!(require_auth(&AuthState::anonymous()), GuardDecision::Redirect("/login"));
        assert_eq!(require_auth(&AuthState::authenticated(AuthUser::new("ada"))), GuardDecision::Allow);
    }

    #[test]
    fn guest_routes_send_users_on() {
        assert_eq!(require_guest(&AuthState::anonymous()), GuardDecision::Allow);
        assert_eq!(
            require_guest(&AuthState::authenticated(AuthUser::new("ada"))),
            GuardDecision::Redirect("/blogs")
        );
    }

    #[test]
    fn only_the_author_may_modify() {
        let ada = AuthState::authenticated(AuthUser::new("ada"));
        let grace = AuthState::authenticated(AuthUser::new("grace"));

        assert!(can_modify(&ada, &post_by(Some("ada"))));
        assert!(!can_modify(&grace, &post_by(Some("ada"))));
        assert!(!can_modify(&AuthState::anonymous(), &post_by(Some("ada"))));
        assert!(!can_modify(&ada, &post_by(None)));
    }
}
