use crate::api::ApiConfig;
use crate::auth::{AuthClient, RegisterField, RegisterForm};
use crate::cli::{actions::report, commands::api};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub api: api::Options,
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

/// Execute the register action.
/// # Errors
/// Returns an error if the API base URL is unusable or registration fails.
pub async fn execute(args: Args) -> Result<()> {
    let config = ApiConfig::load(args.api.base_url.as_deref())
        .context("invalid API configuration")?
        .with_timeout(args.api.timeout);
    debug!(api_base_url = config.api_base_url(), "starting registration");

    let client = AuthClient::new(config)?;

    let form = RegisterForm::new();
    form.edit(RegisterField::Username, args.username);
    form.edit(RegisterField::Email, args.email);
    form.edit(RegisterField::Password, args.password.expose_secret());

    report(form.submit(&client).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::{net::TcpListener, time::Duration};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn args(base_url: String, username: &str) -> Args {
        Args {
            api: api::Options {
                base_url: Some(base_url),
                timeout: Duration::from_secs(5),
            },
            username: username.to_string(),
            email: "ada@ego.dev".to_string(),
            password: SecretString::from("correct-horse".to_string()),
        }
    }

    #[tokio::test]
    async fn execute_succeeds_on_registration() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        execute(args(server.uri(), "ada")).await
    }

    #[tokio::test]
    async fn execute_reports_validation_without_request() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let result = execute(args(server.uri(), "ab")).await;
        let message = result.err().map(|err| err.to_string());
        assert_eq!(
            message.as_deref(),
            Some("Username must be at least 3 characters long")
        );
        Ok(())
    }
}
