//! Terminal event layer for the form: every answer is a change event for the
//! field being prompted, and the form is submitted once both prompts were
//! answered. An empty answer blocks the submission and that field is asked
//! again, the other one keeps its value.
//!
//! On a TTY the answers come from `dialoguer`, which reads the password
//! without echoing it. Piped input is read line by line.

use crate::client::AuthTransport;
use crate::form::{view, Field, FormError, FormStatus, LoginForm};
use anyhow::{bail, Context, Result};
use dialoguer::{Input, Password};
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

/// Source of field values.
pub trait Prompt {
    /// Asks for `field`, `None` once the input is closed.
    fn ask(&mut self, field: Field) -> impl Future<Output = Result<Option<String>>>;
}

/// How a field is read on a TTY.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Echo {
    Visible,
    Hidden,
}

impl Echo {
    #[must_use]
    pub fn for_field(field: Field) -> Self {
        if field.is_masked() {
            Self::Hidden
        } else {
            Self::Visible
        }
    }
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    async fn ask(&mut self, field: Field) -> Result<Option<String>> {
        let prompt = field.label().trim_end_matches(':').to_string();

        let value = tokio::task::spawn_blocking(move || match Echo::for_field(field) {
            Echo::Hidden => Password::new()
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact(),
            Echo::Visible => Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text(),
        })
        .await
        .context("prompt task failed")?
        .with_context(|| format!("failed to read the {field} field"))?;

        Ok(Some(value))
    }
}

/// Line-oriented prompts for piped input: the label goes to `output`, the
/// answer is the next line of `input`.
pub struct LinePrompt<R, W> {
    lines: Lines<R>,
    output: W,
}

impl<R, W> LinePrompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            lines: input.lines(),
            output,
        }
    }
}

impl<R, W> Prompt for LinePrompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn ask(&mut self, field: Field) -> Result<Option<String>> {
        self.output
            .write_all(format!("{} ", field.label()).as_bytes())
            .await?;
        self.output.flush().await?;

        Ok(self.lines.next_line().await?)
    }
}

/// Drives one submission of `form` with answers from `prompt`, writing the
/// rendered form and its outcome to `output`.
///
/// # Errors
/// Returns an error if the input ends before the form could be submitted,
/// reading an answer fails or writing to `output` fails.
pub async fn run<T, P, W>(
    form: &mut LoginForm,
    transport: &T,
    prompt: &mut P,
    output: &mut W,
) -> Result<FormStatus>
where
    T: AuthTransport,
    P: Prompt,
    W: AsyncWrite + Unpin,
{
    let mut pending = vec![Field::Username, Field::Password];

    loop {
        for field in pending.drain(..) {
            let Some(value) = prompt.ask(field).await? else {
                bail!("input closed before the form was submitted");
            };

            debug!("input event on {field}");
            form.update(field, value);
        }

        output.write_all(form.render().as_bytes()).await?;
        output.flush().await?;

        match form.submit(transport).await {
            Ok(status) => {
                if let Some(line) = view::status_line(&status) {
                    output.write_all(format!("{line}\n").as_bytes()).await?;
                    output.flush().await?;
                }
                return Ok(status);
            }
            Err(FormError::MissingField(field)) => {
                output
                    .write_all(format!("{}\n", FormError::MissingField(field)).as_bytes())
                    .await?;
                pending.push(field);
            }
            Err(err @ FormError::Busy) => return Err(err.into()),
        }
    }
}
