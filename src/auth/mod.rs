//! Authentication: login/register wire types, form validation, login/logout.
//!
//! ## Session Model
//!
//! The backend issues a bearer token on login. The SDK persists it, together
//! with the username and wallet balance, through the configured
//! [`SessionStore`](crate::session::SessionStore) and passes it explicitly to
//! every cart call. There is no refresh and no client-side expiry: the
//! session lasts until `client.auth().logout()`.
//!
//! Input is validated before any request is made; see [`validate`].

#[cfg(feature = "http")]
pub mod client;

pub mod validate;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use crate::session::Session;

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login response from the backend.
///
/// `success: true` carries the token and display fields; `success: false`
/// carries only a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, with = "optional_decimal")]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Register response from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

mod optional_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::shared::serde_util::decimal_number;

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "decimal_number")] Decimal);

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
    }

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => decimal_number::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success_deserialize() {
        let json = r#"{"success": true, "token": "testtoken", "username": "criodo", "balance": 5000}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.token.as_deref(), Some("testtoken"));
        assert_eq!(resp.username.as_deref(), Some("criodo"));
        assert_eq!(resp.balance, Some(Decimal::from(5000)));
        assert!(resp.message.is_none());
    }

    #[test]
    fn test_login_failure_deserialize() {
        let json = r#"{"success": false, "message": "Password is incorrect"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert!(resp.token.is_none());
        assert!(resp.balance.is_none());
        assert_eq!(resp.message.as_deref(), Some("Password is incorrect"));
    }

    #[test]
    fn test_credentials_serialize() {
        let body = Credentials {
            username: "criodo".to_string(),
            password: "learnbydoing".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "criodo", "password": "learnbydoing"})
        );
    }
}
