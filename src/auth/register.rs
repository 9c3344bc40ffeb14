//! Registration flow: username, email and password in, login route out. The
//! server's `message` is shown verbatim on failure; nothing is stored on
//! success.

use super::{
    client::AuthClient,
    form::{FormEvent, FormFields, FormState, SubmitOutcome},
    navigator,
    types::RegistrationInput,
    validation,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

pub const REGISTRATION_NOTICE: &str = "Registration successful";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterField {
    Username,
    Email,
    Password,
}

#[derive(Clone, Debug, Default)]
pub struct RegisterFields {
    username: String,
    email: String,
    password: SecretString,
}

impl FormFields for RegisterFields {
    type Field = RegisterField;

    fn set(&mut self, field: RegisterField, value: String) {
        match field {
            RegisterField::Username => self.username = value,
            RegisterField::Email => self.email = value,
            RegisterField::Password => self.password = SecretString::from(value),
        }
    }
}

impl RegisterFields {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

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
pub struct RegisterForm {
    state: FormState<RegisterFields>,
}

impl RegisterForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&self, field: RegisterField, value: impl Into<String>) {
        self.state.apply(FormEvent::Edited {
            field,
            value: value.into(),
        });
    }

    #[must_use]
    pub fn state(&self) -> &FormState<RegisterFields> {
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

    /// Runs one registration attempt. The busy flag is released on every
    /// path, including server rejections.
    #[instrument(skip_all)]
    pub async fn submit(&self, client: &AuthClient) -> SubmitOutcome {
        let Some(_busy) = self.state.busy().try_acquire() else {
            debug!("registration already in flight");
            return SubmitOutcome::Ignored;
        };

        let fields = self.state.fields();
        if let Err(err) = validation::validate_registration(
            &fields.username,
            &fields.email,
            fields.password.expose_secret(),
        ) {
            let message = err.to_string();
            self.state.apply(FormEvent::Rejected(message.clone()));
            return SubmitOutcome::Rejected(message);
        }
        let input = RegistrationInput {
            username: fields.username.clone(),
            email: fields.email.clone(),
            password: fields.password.clone(),
        };

        self.state.apply(FormEvent::Started);

        match client.create_user(&input).await {
            Ok(_) => {
                self.state.apply(FormEvent::Succeeded);
                SubmitOutcome::Navigate {
                    route: navigator::after_registration(),
                    notice: REGISTRATION_NOTICE,
                }
            }
            Err(err) => {
                debug!(error = %err, "registration failed");
                let message = err.user_message();
                self.state.apply(FormEvent::Failed(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}
