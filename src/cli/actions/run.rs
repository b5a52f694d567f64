use crate::cli::actions::{form, ping, signout, Action};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Form(args) => form::execute(args).await,
        Action::SignOut(args) => signout::execute(args).await,
        Action::Ping(args) => ping::execute(args).await,
    }
}
