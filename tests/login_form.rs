//! End-to-end tests for the login form against a mock authentication service.
//!
//! Each test starts a `wiremock` server standing in for the service, points
//! an `HttpTransport` at it and drives a `LoginForm` through a submission.

use anyhow::Result;
use credform::cli::terminal::{self, LinePrompt};
use credform::client::HttpTransport;
use credform::form::{Field, FormError, FormMode, FormStatus, LoginForm};
use serde_json::json;
use std::net::TcpListener;
use tokio::io::BufReader;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn auth_service(status: u16, answer: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"user":"alice","pass":"secret123"}"#))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!(answer)))
        .expect(1)
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn alice_logs_in_and_the_form_is_cleared() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = auth_service(200, "5d41402abc4b2a76").await;
    let transport = HttpTransport::new(&server.uri(), false)?;

    let mut form = LoginForm::new();
    form.update(Field::Username, "alice");
    form.update(Field::Password, "secret123");

    let status = form.submit(&transport).await?;

    match status {
        FormStatus::Responded(response) => {
            assert_eq!(response.status, 200);
            assert_eq!(response.message(), Some("5d41402abc4b2a76"));
        }
        other => panic!("unexpected status: {other:?}"),
    }
    assert_eq!(form.username(), "");
    assert_eq!(form.password_len(), 0);
    assert!(!form.is_busy());

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn rejected_credentials_are_reported_and_cleared() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = auth_service(403, "Invalid Credentials :(").await;
    let transport = HttpTransport::new(&server.uri(), false)?;

    let mut form = LoginForm::new();
    form.set_username("alice");
    form.set_password("secret123");

    form.submit(&transport).await?;

    assert!(form
        .render()
        .ends_with("Request failed (403): Invalid Credentials :(\n"));
    assert_eq!(form.username(), "");
    Ok(())
}

#[tokio::test]
async fn empty_field_never_reaches_the_network() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri(), false)?;
    let mut form = LoginForm::new();
    form.set_username("alice");

    let result = form.submit(&transport).await;

    assert_eq!(result, Err(FormError::MissingField(Field::Password)));
    assert_eq!(form.username(), "alice");

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn unreachable_service_takes_the_failure_path() -> Result<()> {
    let Ok(listener) = TcpListener::bind("127.0.0.1:0") else {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    };
    let port = listener.local_addr()?.port();
    drop(listener);

    let transport = HttpTransport::new(&format!("http://127.0.0.1:{port}"), false)?;
    let mut form = LoginForm::new();
    form.set_username("alice");
    form.set_password("secret123");

    let status = form.submit(&transport).await?;

    assert!(matches!(status, FormStatus::Failed(ref message) if message.starts_with("Network error")));
    assert_eq!(form.username(), "");
    assert_eq!(form.password_len(), 0);
    Ok(())
}

#[tokio::test]
async fn sign_up_form_posts_to_signup() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"user":"alice","pass":"secret123"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("OK")))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri(), false)?;
    let mut form = LoginForm::with_mode(FormMode::SignUp);
    form.set_username("alice");
    form.set_password("secret123");

    let status = form.submit(&transport).await?;

    assert!(matches!(status, FormStatus::Responded(ref response) if response.message() == Some("OK")));

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn terminal_session_against_the_service() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = auth_service(200, "5d41402abc4b2a76").await;
    let transport = HttpTransport::new(&server.uri(), false)?;

    let mut form = LoginForm::new();
    let mut prompt = LinePrompt::new(BufReader::new(&b"alice\nsecret123\n"[..]), Vec::new());
    let mut output = Vec::new();

    terminal::run(&mut form, &transport, &mut prompt, &mut output).await?;

    let output = String::from_utf8(output)?;
    assert!(output.contains("Username: alice\nPassword: *********\n[ Submit ]\n"));
    assert!(!output.contains("secret123"));

    server.verify().await;
    Ok(())
}
