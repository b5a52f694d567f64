//! The `LoginForm` view-model.
//!
//! The form owns two ephemeral fields and runs a single request/response cycle
//! per submission. Event layers call [`LoginForm::update`] on every input
//! change and [`LoginForm::submit`] (or the `begin_submit`/`finish_submit`
//! pair) when the operator submits. Fields are cleared after every submission
//! that reached the network, whatever the outcome.

pub mod view;

use crate::client::{AuthResponse, AuthTransport, ClientError, Credentials};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Input fields of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Username => "Username:",
            Field::Password => "Password:",
        }
    }

    #[must_use]
    pub const fn is_masked(self) -> bool {
        matches!(self, Field::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.id())
    }
}

/// Which endpoint a submission goes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Login,
    SignUp,
}

/// Outcome of the last submission, shown under the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Responded(AuthResponse),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    /// A submission is already in flight.
    Busy,
    /// A required field is empty; nothing was sent.
    MissingField(Field),
}

impl fmt::Display for FormError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Busy => write!(formatter, "A submission is already in progress"),
            FormError::MissingField(field) => {
                write!(formatter, "Please fill out the {field} field")
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Credentials captured by `begin_submit`, ready to be sent.
#[derive(Debug)]
pub struct Submission {
    mode: FormMode,
    credentials: Credentials,
}

impl Submission {
    /// Sends the captured credentials to the endpoint matching the form mode.
    ///
    /// # Errors
    /// Returns a `ClientError` when no usable response arrived.
    pub async fn send<T: AuthTransport>(&self, transport: &T) -> Result<AuthResponse, ClientError> {
        match self.mode {
            FormMode::Login => transport.authenticate(&self.credentials).await,
            FormMode::SignUp => transport.sign_up(&self.credentials).await,
        }
    }
}

#[derive(Debug)]
pub struct LoginForm {
    username: String,
    password: SecretString,
    mode: FormMode,
    busy: bool,
    status: FormStatus,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: empty_secret(),
            mode: FormMode::default(),
            busy: false,
            status: FormStatus::default(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mode: FormMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Number of characters typed into the password field.
    #[must_use]
    pub fn password_len(&self) -> usize {
        self.password.expose_secret().chars().count()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Input-change handler: replaces the value of one field.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Username => self.username = value.into(),
            Field::Password => {
                let value: String = value.into();
                self.password = SecretString::from(value);
            }
        }
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.update(Field::Username, value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.update(Field::Password, value);
    }

    /// First required field that is still empty.
    #[must_use]
    pub fn missing_field(&self) -> Option<Field> {
        if self.username.is_empty() {
            Some(Field::Username)
        } else if self.password.expose_secret().is_empty() {
            Some(Field::Password)
        } else {
            None
        }
    }

    /// Clears both fields and the status.
    pub fn reset(&mut self) {
        self.clear_fields();
        self.status = FormStatus::Idle;
    }

    fn clear_fields(&mut self) {
        self.username.clear();
        self.password = empty_secret();
    }

    /// First half of a submission: checks the required fields, marks the form
    /// busy and captures the credentials.
    ///
    /// # Errors
    /// `FormError::Busy` while another submission is in flight,
    /// `FormError::MissingField` when a field is empty. Neither touches the fields.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.busy {
            return Err(FormError::Busy);
        }

        if let Some(field) = self.missing_field() {
            debug!("submission blocked, {field} is empty");
            return Err(FormError::MissingField(field));
        }

        self.busy = true;
        self.status = FormStatus::Submitting;

        Ok(Submission {
            mode: self.mode,
            credentials: Credentials::new(
                self.username.clone(),
                SecretString::from(self.password.expose_secret().to_string()),
            ),
        })
    }

    /// Second half of a submission: logs the outcome, records it as the form
    /// status and clears both fields.
    pub fn finish_submit(&mut self, result: Result<AuthResponse, ClientError>) -> &FormStatus {
        self.status = match result {
            Ok(response) => {
                info!(
                    status = response.status,
                    body = %response.body,
                    "authentication service responded"
                );
                FormStatus::Responded(response)
            }
            Err(err) => {
                warn!("no usable response from the authentication service: {err}");
                FormStatus::Failed(err.to_string())
            }
        };

        self.clear_fields();
        self.busy = false;

        &self.status
    }

    /// Submit handler: one request, then the fields are cleared.
    ///
    /// # Errors
    /// Returns a `FormError` when the submission is blocked before any request
    /// is made. Transport failures are not errors here; they end up in the
    /// returned status.
    #[instrument(skip_all, fields(mode = ?self.mode))]
    pub async fn submit<T: AuthTransport>(&mut self, transport: &T) -> Result<FormStatus, FormError> {
        let submission = self.begin_submit()?;
        let result = submission.send(transport).await;
        Ok(self.finish_submit(result).clone())
    }

    /// Renders the form as text. See [`view::render`].
    #[must_use]
    pub fn render(&self) -> String {
        view::render(self)
    }
}
