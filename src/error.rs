//! Unified SDK error types.

use thiserror::Error;

use crate::view::Notification;

/// Message shown when the backend cannot be reached or answers garbage.
pub const BACKEND_UNREACHABLE: &str =
    "Something went wrong. Check that the backend is running, reachable and returns valid JSON.";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// Convert into the transient notification the UI should display.
    ///
    /// Validation and cart-rule failures are warnings; backend rejections
    /// carry the server message; transport failures get a generic message.
    pub fn notification(&self) -> Notification {
        match self {
            SdkError::Validation(e) => Notification::warning(e.to_string()),
            SdkError::Cart(e) => Notification::warning(e.to_string()),
            SdkError::Auth(AuthError::Rejected(message)) => Notification::error(message.clone()),
            SdkError::Auth(AuthError::NotAuthenticated) => {
                Notification::warning(CartError::LoginRequired.to_string())
            }
            #[cfg(feature = "http")]
            SdkError::Http(e) => match e.server_message() {
                Some(message) => Notification::error(message.to_string()),
                None => Notification::error(BACKEND_UNREACHABLE),
            },
            _ => Notification::error(BACKEND_UNREACHABLE),
        }
    }
}

/// HTTP-layer errors.
#[cfg(feature = "http")]
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[cfg(feature = "http")]
impl HttpError {
    /// The backend-supplied message for 400-class rejections, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            HttpError::Unauthorized(m) | HttpError::NotFound(m) | HttpError::BadRequest(m)
                if !m.is_empty() =>
            {
                Some(m.as_str())
            }
            _ => None,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The backend answered `success: false` with this message.
    #[error("{0}")]
    Rejected(String),
}

/// Add-to-cart rule violations. Raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Login to add an item to the Cart")]
    LoginRequired,

    #[error("Item already in cart. Use the cart sidebar to update quantity or remove item.")]
    Duplicate,
}

/// Form validation failures, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is a required field")]
    UsernameRequired,

    #[error("Username must be at least {0} characters")]
    UsernameTooShort(usize),

    #[error("Password is a required field")]
    PasswordRequired,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Session persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Variant;

    #[cfg(feature = "http")]
    #[test]
    fn test_unauthorized_shows_server_message() {
        let err = SdkError::from(HttpError::Unauthorized("Please authenticate".to_string()));
        let note = err.notification();
        assert_eq!(note.variant, Variant::Error);
        assert_eq!(note.message, "Please authenticate");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_rejection_without_message_is_generic() {
        let err = SdkError::from(HttpError::Unauthorized(String::new()));
        assert_eq!(err.notification().message, BACKEND_UNREACHABLE);
    }

    #[test]
    fn test_rule_violations_are_warnings() {
        let note = SdkError::from(CartError::Duplicate).notification();
        assert_eq!(note.variant, Variant::Warning);
        let note = SdkError::from(ValidationError::PasswordMismatch).notification();
        assert_eq!(note, Notification::warning("Passwords do not match"));
    }
}
