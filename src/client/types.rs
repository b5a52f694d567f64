//! Wire types for the authentication service. Request bodies are serialized to
//! text before they are sent; secrets are only exposed while building the body.

use super::ClientError;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Username and password taken from the form.
#[derive(Debug)]
pub struct Credentials {
    pub user: String,
    pub pass: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(user: impl Into<String>, pass: SecretString) -> Self {
        Self {
            user: user.into(),
            pass,
        }
    }

    /// Serializes the credentials as `{"user":..,"pass":..}`.
    ///
    /// # Errors
    /// Returns `ClientError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, ClientError> {
        encode(&CredentialsPayload {
            user: &self.user,
            pass: self.pass.expose_secret(),
        })
    }
}

#[derive(Serialize)]
struct CredentialsPayload<'a> {
    user: &'a str,
    pass: &'a str,
}

/// Body of a sign-out request.
#[derive(Debug)]
pub struct SignOutRequest {
    pub user: String,
    pub token: SecretString,
}

impl SignOutRequest {
    #[must_use]
    pub fn new(user: impl Into<String>, token: SecretString) -> Self {
        Self {
            user: user.into(),
            token,
        }
    }

    /// Serializes the request as `{"user":..,"token":..}`.
    ///
    /// # Errors
    /// Returns `ClientError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, ClientError> {
        encode(&SignOutPayload {
            user: &self.user,
            token: self.token.expose_secret(),
        })
    }
}

#[derive(Serialize)]
struct SignOutPayload<'a> {
    user: &'a str,
    token: &'a str,
}

fn encode<T: Serialize>(payload: &T) -> Result<String, ClientError> {
    serde_json::to_string(payload)
        .map_err(|err| ClientError::Serialization(format!("Failed to encode request: {err}")))
}

/// Whatever the service answered: the HTTP status and the decoded body.
///
/// The service replies with indented JSON strings (a token, `"OK"`, or an
/// error message). Bodies that are not JSON are kept verbatim as a string.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthResponse {
    pub status: u16,
    pub body: Value,
}

impl AuthResponse {
    #[must_use]
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()));
        Self { status, body }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body when it is a plain JSON string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.as_str()
    }
}

impl fmt::Display for AuthResponse {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "{} {message}", self.status),
            None => write!(formatter, "{} {}", self.status, self.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_serialize_to_text() -> Result<(), ClientError> {
        let credentials = Credentials::new("alice", SecretString::from("secret123".to_string()));
        assert_eq!(
            credentials.to_json()?,
            r#"{"user":"alice","pass":"secret123"}"#
        );
        Ok(())
    }

    #[test]
    fn credentials_escape_json_characters() -> Result<(), ClientError> {
        let credentials = Credentials::new("a\"b", SecretString::from("p\\q".to_string()));
        assert_eq!(credentials.to_json()?, r#"{"user":"a\"b","pass":"p\\q"}"#);
        Ok(())
    }

    #[test]
    fn credentials_debug_hides_password() {
        let credentials = Credentials::new("alice", SecretString::from("secret123".to_string()));
        let debug = format!("{credentials:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret123"));
    }

    #[test]
    fn sign_out_serializes_user_and_token() -> Result<(), ClientError> {
        let request = SignOutRequest::new("alice", SecretString::from("abc123".to_string()));
        assert_eq!(request.to_json()?, r#"{"user":"alice","token":"abc123"}"#);
        Ok(())
    }

    #[test]
    fn response_parses_indented_json_string() {
        let response = AuthResponse::from_text(200, "\"3f2a9c\"");
        assert!(response.is_success());
        assert_eq!(response.message(), Some("3f2a9c"));
        assert_eq!(response.to_string(), "200 3f2a9c");
    }

    #[test]
    fn response_keeps_non_json_body_as_text() {
        let response = AuthResponse::from_text(502, "Bad Gateway");
        assert!(!response.is_success());
        assert_eq!(response.body, json!("Bad Gateway"));
    }

    #[test]
    fn response_displays_structured_body() {
        let response = AuthResponse::from_text(403, r#"{"error":"denied"}"#);
        assert_eq!(response.message(), None);
        assert_eq!(response.to_string(), r#"403 {"error":"denied"}"#);
    }
}
