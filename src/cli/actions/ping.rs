use crate::cli::globals::GlobalArgs;
use crate::client::AuthTransport;
use crate::form::{view, FormStatus};
use anyhow::{bail, Context, Result};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// Checks that the authentication service answers.
/// # Errors
/// Returns an error if the service is unreachable or answers with a failure status.
pub async fn execute(args: Args) -> Result<()> {
    let transport = args.globals.transport()?;

    let response = transport
        .ping()
        .await
        .with_context(|| format!("{} is unreachable", transport.base_url()))?;

    let healthy = response.is_success();
    if let Some(line) = view::status_line(&FormStatus::Responded(response)) {
        println!("{line}");
    }

    if !healthy {
        bail!("{} is not healthy", transport.base_url());
    }

    Ok(())
}
