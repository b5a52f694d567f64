use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientError {
    Config(String),
    Network(String),
    Timeout(String),
    Parse(String),
    Serialization(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Config(message) => write!(formatter, "Config error: {message}"),
            ClientError::Network(message) => write!(formatter, "Network error: {message}"),
            ClientError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            ClientError::Parse(message) => write!(formatter, "Response error: {message}"),
            ClientError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout("Request timed out.".to_string())
        } else if err.is_builder() {
            ClientError::Config(format!("Failed to build request: {err}"))
        } else if err.is_decode() || err.is_body() {
            ClientError::Parse(format!("Failed to read response: {err}"))
        } else {
            ClientError::Network(format!("Unable to reach the server: {err}"))
        }
    }
}
