//! Page header: auth buttons or the logged-in user.

use crate::session::Session;
use crate::shared::fmt;

/// A clickable header action. Where it leads is up to the app's router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    BackToExplore,
    Login,
    Register,
    Logout,
}

impl HeaderAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BackToExplore => "Back to explore",
            Self::Login => "LOGIN",
            Self::Register => "REGISTER",
            Self::Logout => "LOGOUT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderView {
    /// On the login/register pages the auth buttons are hidden.
    AuthPage,
    Anonymous,
    LoggedIn { username: String, balance: String },
}

impl HeaderView {
    pub fn render(session: Option<&Session>, on_auth_page: bool) -> Self {
        if on_auth_page {
            return Self::AuthPage;
        }
        match session {
            Some(s) => Self::LoggedIn {
                username: s.username.clone(),
                balance: fmt::money(&s.balance),
            },
            None => Self::Anonymous,
        }
    }

    pub fn actions(&self) -> &'static [HeaderAction] {
        match self {
            Self::AuthPage => &[HeaderAction::BackToExplore],
            Self::Anonymous => &[HeaderAction::Login, HeaderAction::Register],
            Self::LoggedIn { .. } => &[HeaderAction::Logout],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_anonymous_header() {
        let header = HeaderView::render(None, false);
        assert_eq!(header, HeaderView::Anonymous);
        assert_eq!(header.actions(), &[HeaderAction::Login, HeaderAction::Register]);
    }

    #[test]
    fn test_logged_in_header() {
        let session = Session::new("t", "criodo", Decimal::from(5000));
        let header = HeaderView::render(Some(&session), false);
        assert_eq!(
            header,
            HeaderView::LoggedIn {
                username: "criodo".to_string(),
                balance: "$5,000".to_string()
            }
        );
        assert_eq!(header.actions()[0].label(), "LOGOUT");
    }

    #[test]
    fn test_auth_page_hides_buttons() {
        let session = Session::new("t", "criodo", Decimal::ZERO);
        let header = HeaderView::render(Some(&session), true);
        assert_eq!(header.actions(), &[HeaderAction::BackToExplore]);
    }
}
