//! Login and registration forms.
//!
//! Submitting is split in two so the form is not borrowed while the request
//! runs:
//!
//! ```rust,ignore
//! if let Ok(Some(creds)) = form.begin_submit() {
//!     // form.submit_visible() == false from here on
//!     let result = client.auth().login(&creds.username, &creds.password).await;
//!     let note = form.finish_submit(result);
//! }
//! ```
//!
//! While a submission is pending the submit button is hidden and further
//! `begin_submit` calls return `Ok(None)`.

use super::Notification;
use crate::auth::validate::{validate_login, validate_registration};
use crate::auth::{Credentials, Session};
use crate::error::{SdkError, ValidationError};

pub const LOGGED_IN: &str = "Logged in successfully";
pub const REGISTERED: &str = "Registered Successfully";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    in_flight: bool,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            in_flight: false,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_login(&self.username, &self.password)
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn submit_visible(&self) -> bool {
        !self.in_flight
    }

    /// Validate and mark the form as pending.
    ///
    /// `Err` carries the validation warning; nothing should be sent.
    /// `Ok(None)` means a submission is already pending.
    pub fn begin_submit(&mut self) -> Result<Option<Credentials>, Notification> {
        if self.in_flight {
            return Ok(None);
        }
        self.validate()
            .map_err(|e| SdkError::from(e).notification())?;
        self.in_flight = true;
        Ok(Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }))
    }

    /// Clear the pending flag and turn the login outcome into a notification.
    pub fn finish_submit(&mut self, result: Result<Session, SdkError>) -> Notification {
        self.in_flight = false;
        match result {
            Ok(_) => Notification::success(LOGGED_IN),
            Err(e) => e.notification(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    in_flight: bool,
}

impl RegisterForm {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            in_flight: false,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_registration(&self.username, &self.password, &self.confirm_password)
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn submit_visible(&self) -> bool {
        !self.in_flight
    }

    /// Validate and mark the form as pending. See [`LoginForm::begin_submit`].
    ///
    /// The confirmation has already been checked, so only the credentials
    /// are returned.
    pub fn begin_submit(&mut self) -> Result<Option<Credentials>, Notification> {
        if self.in_flight {
            return Ok(None);
        }
        self.validate()
            .map_err(|e| SdkError::from(e).notification())?;
        self.in_flight = true;
        Ok(Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }))
    }

    pub fn finish_submit(&mut self, result: Result<(), SdkError>) -> Notification {
        self.in_flight = false;
        match result {
            Ok(()) => Notification::success(REGISTERED),
            Err(e) => e.notification(),
        }
    }
}
