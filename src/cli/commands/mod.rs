pub mod logging;
pub mod service;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const CMD_LOGIN: &str = "login";
pub const CMD_SIGNUP: &str = "signup";
pub const CMD_SIGNOUT: &str = "signout";
pub const CMD_PING: &str = "ping";

pub const ARG_USER: &str = "user";
pub const ARG_TOKEN: &str = "token";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("credform")
        .about("Login form for a username/password authentication service")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand(Command::new(CMD_LOGIN).about("Fill in the login form and submit it (default)"))
        .subcommand(Command::new(CMD_SIGNUP).about("Fill in the form and create an account"))
        .subcommand(
            Command::new(CMD_SIGNOUT)
                .about("Revoke a token issued at login")
                .arg(
                    Arg::new(ARG_USER)
                        .long("user")
                        .help("Username the token was issued to")
                        .env("CREDFORM_USER")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_TOKEN)
                        .long("token")
                        .help("Token to revoke")
                        .env("CREDFORM_TOKEN")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(Command::new(CMD_PING).about("Check that the authentication service answers"));

    let command = service::with_args(command);
    logging::with_args(command)
}
