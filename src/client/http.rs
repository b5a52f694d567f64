use super::{
    build_url_with_base, AuthResponse, AuthTransport, ClientError, Credentials, SignOutRequest,
    AUTH_PATH, PING_PATH, SIGNOUT_PATH, SIGNUP_PATH,
};
use reqwest::{header::CONTENT_TYPE, Client, Response};
use tracing::{debug, instrument};

/// reqwest-backed transport for the authentication service.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport rooted at `base_url`.
    ///
    /// `accept_invalid_certs` is meant for a local service running with a
    /// self-signed certificate.
    ///
    /// # Errors
    /// Returns `ClientError::Config` if the HTTP client cannot be built.
    pub fn new(base_url: &str, accept_invalid_certs: bool) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|err| ClientError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }

    async fn post_json(&self, path: &str, payload: String) -> Result<AuthResponse, ClientError> {
        let url = self.endpoint(path);

        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        read_response(response).await
    }
}

impl AuthTransport for HttpTransport {
    #[instrument(skip_all, fields(base_url = %self.base_url))]
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        let payload = credentials.to_json()?;
        self.post_json(AUTH_PATH, payload).await
    }

    #[instrument(skip_all, fields(base_url = %self.base_url))]
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        let payload = credentials.to_json()?;
        self.post_json(SIGNUP_PATH, payload).await
    }

    #[instrument(skip_all, fields(base_url = %self.base_url))]
    async fn sign_out(&self, request: &SignOutRequest) -> Result<AuthResponse, ClientError> {
        let payload = request.to_json()?;
        self.post_json(SIGNOUT_PATH, payload).await
    }

    #[instrument(skip_all, fields(base_url = %self.base_url))]
    async fn ping(&self) -> Result<AuthResponse, ClientError> {
        let url = self.endpoint(PING_PATH);

        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;

        read_response(response).await
    }
}

async fn read_response(response: Response) -> Result<AuthResponse, ClientError> {
    let status = response.status().as_u16();
    let text = response.text().await?;

    Ok(AuthResponse::from_text(status, &text))
}
