use clap::{builder::ValueParser, Arg, ArgAction, Command};
use url::Url;

pub const ARG_URL: &str = "url";
pub const ARG_ACCEPT_INVALID_CERTS: &str = "accept-invalid-certs";

/// Accepts absolute `http`/`https` URLs with a host and returns them untouched,
/// so an explicit default port such as `:443` is kept in request URLs.
#[must_use]
pub fn validator_url() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<String, String> {
        let url = Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("unsupported scheme: {}", url.scheme()));
        }

        if url.host().is_none() {
            return Err("URL has no host".to_string());
        }

        Ok(value.trim().to_string())
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_URL)
                .short('u')
                .long("url")
                .help("Base URL of the authentication service")
                .env("CREDFORM_URL")
                .global(true)
                .default_value(crate::DEFAULT_BASE_URL)
                .value_parser(validator_url()),
        )
        .arg(
            Arg::new(ARG_ACCEPT_INVALID_CERTS)
                .long("accept-invalid-certs")
                .help("Accept self-signed or otherwise invalid TLS certificates")
                .env("CREDFORM_ACCEPT_INVALID_CERTS")
                .global(true)
                .action(ArgAction::SetTrue),
        )
}
