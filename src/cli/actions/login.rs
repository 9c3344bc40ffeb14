use crate::api::ApiConfig;
use crate::auth::{AuthClient, LoginField, LoginForm, SessionContext};
use crate::cli::{actions::report, commands::api};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub api: api::Options,
    pub email: String,
    pub password: SecretString,
}

/// Execute the login action.
/// # Errors
/// Returns an error if the API base URL is unusable or the login fails.
pub async fn execute(args: Args) -> Result<()> {
    let config = ApiConfig::load(args.api.base_url.as_deref())
        .context("invalid API configuration")?
        .with_timeout(args.api.timeout);
    debug!(api_base_url = config.api_base_url(), "starting login");

    let client = AuthClient::new(config)?;
    let session = SessionContext::new();

    let form = LoginForm::new();
    form.edit(LoginField::Email, args.email);
    form.edit(LoginField::Password, args.password.expose_secret());

    let outcome = form.submit(&client, &session).await;
    if session.is_authenticated() {
        info!(user_id = session.user_id().as_deref().unwrap_or_default(), "signed in");
    }

    report(outcome)
}
