//! Text rendition of the form: one labeled line per field, the submit control
//! and, once something happened, a status line. The password is always masked.

use super::{Field, FormMode, FormStatus, LoginForm};
use std::fmt::Write;

const MASK: char = '*';
/// Maximum number of response characters shown in the status line.
const MAX_STATUS_CHARS: usize = 200;

#[must_use]
pub fn render(form: &LoginForm) -> String {
    let mut out = String::new();

    for field in [Field::Username, Field::Password] {
        let _ = writeln!(out, "{} {}", field.label(), field_value(form, field));
    }

    let _ = write!(out, "[ {} ]", submit_label(form.mode()));
    if form.is_busy() {
        out.push_str(" sending...");
    }
    out.push('\n');

    if let Some(line) = status_line(form.status()) {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn field_value(form: &LoginForm, field: Field) -> String {
    if field.is_masked() {
        std::iter::repeat(MASK).take(form.password_len()).collect()
    } else {
        form.username().to_string()
    }
}

#[must_use]
pub const fn submit_label(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Login => "Submit",
        FormMode::SignUp => "Sign up",
    }
}

/// Status line for a finished submission, `None` while idle or in flight.
#[must_use]
pub fn status_line(status: &FormStatus) -> Option<String> {
    match status {
        FormStatus::Idle | FormStatus::Submitting => None,
        FormStatus::Responded(response) => {
            let message = response
                .message()
                .map_or_else(|| response.body.to_string(), ToString::to_string);
            let message = truncate(&message);
            if response.is_success() {
                Some(format!("Server answered ({}): {message}", response.status))
            } else {
                Some(format!("Request failed ({}): {message}", response.status))
            }
        }
        FormStatus::Failed(message) => Some(format!("Request failed: {}", truncate(message))),
    }
}

fn truncate(message: &str) -> String {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        "no details".to_string()
    } else {
        trimmed.chars().take(MAX_STATUS_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AuthResponse, ClientError};
    use serde_json::json;

    #[test]
    fn renders_labels_and_masks_password() {
        let mut form = LoginForm::new();
        form.set_username("alice");
        form.set_password("secret123");

        let view = render(&form);

        assert_eq!(view, "Username: alice\nPassword: *********\n[ Submit ]\n");
        assert!(!view.contains("secret123"));
    }

    #[test]
    fn renders_empty_form() {
        assert_eq!(
            render(&LoginForm::new()),
            "Username: \nPassword: \n[ Submit ]\n"
        );
    }

    #[test]
    fn sign_up_mode_changes_the_control() {
        let form = LoginForm::with_mode(FormMode::SignUp);
        assert!(render(&form).contains("[ Sign up ]"));
    }

    #[test]
    fn busy_form_shows_progress() {
        let mut form = LoginForm::new();
        form.set_username("alice");
        form.set_password("pw");
        let _submission = form.begin_submit();

        assert!(render(&form).contains("[ Submit ] sending..."));
    }

    #[test]
    fn status_line_after_success() {
        let mut form = LoginForm::new();
        form.finish_submit(Ok(AuthResponse {
            status: 200,
            body: json!("5d41402abc4b2a76"),
        }));

        assert!(render(&form).ends_with("Server answered (200): 5d41402abc4b2a76\n"));
    }

    #[test]
    fn status_line_after_rejection_and_failure() {
        let rejected = FormStatus::Responded(AuthResponse {
            status: 403,
            body: json!("Invalid Credentials :("),
        });
        assert_eq!(
            status_line(&rejected),
            Some("Request failed (403): Invalid Credentials :(".to_string())
        );

        let failed = FormStatus::Failed(ClientError::Network("refused".to_string()).to_string());
        assert_eq!(
            status_line(&failed),
            Some("Request failed: Network error: refused".to_string())
        );

        assert_eq!(status_line(&FormStatus::Idle), None);
    }

    #[test]
    fn status_line_truncates_long_bodies() {
        let status = FormStatus::Responded(AuthResponse {
            status: 500,
            body: json!("x".repeat(500)),
        });
        let line = status_line(&status).unwrap_or_default();
        assert_eq!(line.len(), "Request failed (500): ".len() + MAX_STATUS_CHARS);
    }
}
