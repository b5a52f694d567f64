use crate::client::HttpTransport;
use anyhow::{Context, Result};

/// Arguments shared by every action.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub base_url: String,
    pub accept_invalid_certs: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            accept_invalid_certs: false,
        }
    }

    /// Builds the HTTP transport for the configured service.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn transport(&self) -> Result<HttpTransport> {
        HttpTransport::new(&self.base_url, self.accept_invalid_certs)
            .with_context(|| format!("Failed to prepare a client for {}", self.base_url))
    }
}
