//! Form validation, run before any network call.
//!
//! Checks run in a fixed order and stop at the first failure, so the user
//! always sees the single most basic problem with the form.

use crate::error::ValidationError;

/// Minimum username length accepted at registration.
pub const MIN_USERNAME_LEN: usize = 6;
/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a login form: username, then password, must be non-empty.
pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

/// Validate a registration form.
///
/// Order: username present, username long enough, password present,
/// password long enough, confirmation matches.
pub fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    let username_len = username.chars().count();
    let password_len = password.chars().count();

    if username_len == 0 {
        return Err(ValidationError::UsernameRequired);
    }
    if username_len < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort(MIN_USERNAME_LEN));
    }
    if password_len == 0 {
        return Err(ValidationError::PasswordRequired);
    }
    if password_len < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
