//! Client side of the authentication service. The form only talks to the
//! [`AuthTransport`] trait so event layers and tests can swap the network.

pub mod errors;
pub mod http;
pub mod types;

pub use errors::ClientError;
pub use http::HttpTransport;
pub use types::{AuthResponse, Credentials, SignOutRequest};

use std::future::Future;

pub const AUTH_PATH: &str = "/auth";
pub const SIGNUP_PATH: &str = "/signup";
pub const SIGNOUT_PATH: &str = "/signout";
pub const PING_PATH: &str = "/";

/// Requests understood by the authentication service.
///
/// A returned `AuthResponse` means the service answered, whatever the status.
/// `Err` means no usable response arrived.
pub trait AuthTransport {
    /// `POST /auth` with the credentials as a JSON body.
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResponse, ClientError>> + Send;

    /// `POST /signup` with the credentials as a JSON body.
    fn sign_up(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResponse, ClientError>> + Send;

    /// `POST /signout` with the user and the token to revoke.
    fn sign_out(
        &self,
        request: &SignOutRequest,
    ) -> impl Future<Output = Result<AuthResponse, ClientError>> + Send;

    /// `GET /`, the service health ping.
    fn ping(&self) -> impl Future<Output = Result<AuthResponse, ClientError>> + Send;
}

/// Joins a base URL and a path with exactly one slash between them.
#[must_use]
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
