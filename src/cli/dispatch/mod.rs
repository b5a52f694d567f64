//! Maps parsed arguments to the action to run.

use crate::cli::actions::{form, ping, signout, Action};
use crate::cli::commands::{service, ARG_TOKEN, ARG_USER, CMD_PING, CMD_SIGNOUT, CMD_SIGNUP};
use crate::cli::globals::GlobalArgs;
use crate::form::FormMode;
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Map validated CLI matches to an action. Without a subcommand the login form runs.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let base_url = matches
        .get_one::<String>(service::ARG_URL)
        .cloned()
        .context("missing required argument: --url")?;

    let mut globals = GlobalArgs::new(base_url);
    globals.accept_invalid_certs = matches.get_flag(service::ARG_ACCEPT_INVALID_CERTS);

    let action = match matches.subcommand() {
        Some((CMD_SIGNUP, _)) => Action::Form(form::Args {
            globals,
            mode: FormMode::SignUp,
        }),
        Some((CMD_SIGNOUT, sub_m)) => {
            let user = sub_m
                .get_one::<String>(ARG_USER)
                .cloned()
                .context("missing required argument: --user")?;
            let token = sub_m
                .get_one::<String>(ARG_TOKEN)
                .cloned()
                .context("missing required argument: --token")?;

            Action::SignOut(signout::Args {
                globals,
                user,
                token: SecretString::from(token),
            })
        }
        Some((CMD_PING, _)) => Action::Ping(ping::Args { globals }),
        _ => Action::Form(form::Args {
            globals,
            mode: FormMode::Login,
        }),
    };

    Ok(action)
}
