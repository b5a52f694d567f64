pub mod form;
pub mod ping;
pub mod signout;

// The match over every action lives in `run` so this module stays small.
mod run;

#[derive(Debug)]
pub enum Action {
    Form(form::Args),
    SignOut(signout::Args),
    Ping(ping::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
