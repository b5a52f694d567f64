//! # credform
//!
//! A login form that collects a username and a password and submits them to a
//! username/password authentication endpoint.
//!
//! ## Layout
//!
//! - [`form`]: the `LoginForm` view-model. It owns the two fields, the busy
//!   flag and the status of the last submission, and renders itself as text.
//! - [`client`]: the `AuthTransport` seam and its reqwest implementation for
//!   `/auth`, `/signup`, `/signout` and the `/` health ping.
//! - [`cli`]: the terminal event layer. It parses arguments, sets up logging,
//!   feeds stdin lines into the form and runs the selected action.
//!
//! ## Submission cycle
//!
//! 1. Both fields must be non-empty, otherwise nothing is sent.
//! 2. One `POST` with `Content-Type: application/json` and the body
//!    `{"user":"..","pass":".."}`.
//! 3. The response (or the lack of one) is logged and kept as the form status.
//! 4. Both fields are cleared, whatever the outcome.
//!
//! The password is held as a `SecretString` and must never be logged.

pub mod cli;
pub mod client;
pub mod form;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Base URL of the authentication service when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://localhost:443";
