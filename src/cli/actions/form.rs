use crate::cli::{
    globals::GlobalArgs,
    terminal::{self, LinePrompt, TerminalPrompt},
};
use crate::form::{FormMode, LoginForm};
use anyhow::Result;
use std::io::IsTerminal;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub mode: FormMode,
}

/// Shows the form on the terminal and submits it once.
/// # Errors
/// Returns an error if the client cannot be built or stdin closes early.
pub async fn execute(args: Args) -> Result<()> {
    let transport = args.globals.transport()?;

    info!("form endpoint base: {}", transport.base_url());

    let mut form = LoginForm::with_mode(args.mode);
    let mut output = stdout();

    if std::io::stdin().is_terminal() {
        terminal::run(&mut form, &transport, &mut TerminalPrompt, &mut output).await?;
    } else {
        let mut prompt = LinePrompt::new(BufReader::new(stdin()), stdout());
        terminal::run(&mut form, &transport, &mut prompt, &mut output).await?;
    }

    Ok(())
}
