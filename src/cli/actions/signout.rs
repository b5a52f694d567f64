use crate::cli::globals::GlobalArgs;
use crate::client::{AuthTransport, SignOutRequest};
use crate::form::{view, FormStatus};
use anyhow::{Context, Result};
use secrecy::SecretString;
use tracing::{info, instrument};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub user: String,
    pub token: SecretString,
}

/// Revokes a token issued at login.
/// # Errors
/// Returns an error if the service could not be reached.
#[instrument(skip_all, fields(user = %args.user))]
pub async fn execute(args: Args) -> Result<()> {
    let transport = args.globals.transport()?;
    let request = SignOutRequest::new(args.user, args.token);

    let response = transport
        .sign_out(&request)
        .await
        .context("no usable response from the authentication service")?;

    info!(status = response.status, "sign-out answered");

    if let Some(line) = view::status_line(&FormStatus::Responded(response)) {
        println!("{line}");
    }

    Ok(())
}
