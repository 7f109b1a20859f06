//! Auth sub-client — login, register, logout, current session.

use crate::auth::validate::{validate_login, validate_registration};
use crate::auth::{Credentials, LoginResponse, Session};
use crate::client::QKartClient;
use crate::error::{AuthError, HttpError, SdkError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a QKartClient,
}

impl<'a> Auth<'a> {
    /// Log in and persist the session.
    ///
    /// Input is validated first; a validation failure never reaches the
    /// network. A backend rejection surfaces as [`AuthError::Rejected`] with
    /// the server's message.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, SdkError> {
        validate_login(username, password)?;

        let body = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .client
            .http
            .login(&body)
            .await
            .map_err(rejection_from_http)?;

        let session = session_from_login(resp)?;
        self.client.sessions.persist(&session)?;
        tracing::debug!(username = %session.username, "Logged in");
        Ok(session)
    }

    /// Register a new account. Does not log in.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), SdkError> {
        validate_registration(username, password, confirm_password)?;

        let body = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .client
            .http
            .register(&body)
            .await
            .map_err(rejection_from_http)?;

        if !resp.success {
            return Err(AuthError::Rejected(resp.message.unwrap_or_default()).into());
        }
        tracing::debug!(username, "Registered");
        Ok(())
    }

    /// Forget the session. Immediate; no request is made.
    pub fn logout(&self) -> Result<(), SdkError> {
        self.client.sessions.clear()?;
        tracing::debug!("Logged out");
        Ok(())
    }

    /// The persisted session, if any.
    pub fn session(&self) -> Result<Option<Session>, SdkError> {
        Ok(self.client.sessions.load()?)
    }

    /// Whether a session is persisted.
    pub fn is_authenticated(&self) -> bool {
        self.client.sessions.is_authenticated()
    }
}

/// 400-class auth responses carry `{success: false, message}`.
fn rejection_from_http(e: HttpError) -> SdkError {
    match e {
        HttpError::BadRequest(message) => AuthError::Rejected(message).into(),
        other => other.into(),
    }
}

fn session_from_login(resp: LoginResponse) -> Result<Session, SdkError> {
    if !resp.success {
        return Err(AuthError::Rejected(resp.message.unwrap_or_default()).into());
    }
    match (resp.token, resp.username) {
        (Some(token), Some(username)) => Ok(Session::new(
            token,
            username,
            resp.balance.unwrap_or_default(),
        )),
        _ => Err(SdkError::Other(
            "Login response is missing token or username".to_string(),
        )),
    }
}
