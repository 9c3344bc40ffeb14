//! Login flow: email and password in, session token and dashboard route out.
//!
//! Flow Overview: validate presence of both fields, `POST /sessions`, store
//! the access token in the [`SessionContext`], clear the form, and hand back
//! the dashboard route for the returned user id.

use super::{
    client::AuthClient,
    form::{FormEvent, FormFields, FormState, SubmitOutcome},
    navigator,
    session::SessionContext,
    types::Credentials,
    validation,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

pub const LOGIN_NOTICE: &str = "Login successful";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Debug, Default)]
pub struct LoginFields {
    email: String,
    password: SecretString,
}

impl FormFields for LoginFields {
    type Field = LoginField;

    fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = SecretString::from(value),
        }
    }
}

impl LoginFields {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }
}

#[derive(Debug, Default)]
pub struct LoginForm {
    state: FormState<LoginFields>,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&self, field: LoginField, value: impl Into<String>) {
        self.state.apply(FormEvent::Edited {
            field,
            value: value.into(),
        });
    }

    #[must_use]
    pub fn state(&self) -> &FormState<LoginFields> {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.state.status()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.busy().is_busy()
    }

    /// Runs one login attempt. A call made while another attempt is in flight
    /// on the same form returns [`SubmitOutcome::Ignored`] without touching
    /// the network.
    #[instrument(skip_all)]
    pub async fn submit(&self, client: &AuthClient, session: &SessionContext) -> SubmitOutcome {
        let Some(_busy) = self.state.busy().try_acquire() else {
            debug!("login already in flight");
            return SubmitOutcome::Ignored;
        };

        let fields = self.state.fields();
        if let Err(err) = validation::validate_login(&fields.email, fields.password.expose_secret())
        {
            let message = err.to_string();
            self.state.apply(FormEvent::Rejected(message.clone()));
            return SubmitOutcome::Rejected(message);
        }
        let credentials = Credentials::new(fields.email.clone(), fields.password.clone());

        self.state.apply(FormEvent::Started);

        match client.create_session(&credentials).await {
            Ok(grant) => {
                session.establish(&grant);
                self.state.apply(FormEvent::Succeeded);
                SubmitOutcome::Navigate {
                    route: navigator::after_login(&grant.user_id),
                    notice: LOGIN_NOTICE,
                }
            }
            Err(err) => {
                debug!(error = %err, "login failed");
                let message = err.user_message();
                self.state.apply(FormEvent::Failed(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}
