//! Client for the session and user endpoints. Each call issues exactly one
//! request and never retries; callers turn the returned `AppError` into a
//! status line. Request bodies carry passwords and must never be logged.

use crate::api::{
    ApiConfig, AppError, GENERIC_FAILURE,
    http::{build_client, post_json, read_json},
};
use crate::auth::types::{
    ApiMessage, Credentials, LoginRequest, LoginResponse, RegisterRequest, RegistrationInput,
    SessionGrant,
};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};

pub const SESSIONS_PATH: &str = "/sessions";
pub const USER_PATH: &str = "/user";

pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
pub const BAD_REQUEST: &str = "Bad request. Please check your input.";

#[derive(Clone, Debug)]
pub struct AuthClient {
    http: Client,
    config: ApiConfig,
}

impl AuthClient {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let http = build_client(&config)?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Signs in with `POST /sessions`.
    ///
    /// Non-success statuses are mapped without reading the body: 401 and 400
    /// get dedicated messages, everything else the generic one.
    ///
    /// # Errors
    /// Returns `AppError::Http` for non-success statuses, `AppError::Parse` if
    /// the success body lacks `id` or `accessToken`, and transport errors as
    /// produced by [`post_json`].
    #[instrument(skip_all)]
    pub async fn create_session(&self, credentials: &Credentials) -> Result<SessionGrant, AppError> {
        let url = self.config.endpoint(SESSIONS_PATH);
        let response = post_json(&self.http, &url, &LoginRequest::from(credentials)).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "login rejected");
            return Err(AppError::Http {
                status: status.as_u16(),
                message: login_status_message(status).to_string(),
            });
        }

        let body: LoginResponse = read_json(response).await?;
        let grant = SessionGrant::from(body);
        debug!(user_id = %grant.user_id, "session created");

        Ok(grant)
    }

    /// Creates an account with `POST /user`.
    ///
    /// The body is parsed as JSON whatever the status; on failure its
    /// `message` field is surfaced verbatim.
    ///
    /// # Errors
    /// Returns `AppError::Http` carrying the server message for non-success
    /// statuses, `AppError::Parse` if the body is not JSON, and transport
    /// errors as produced by [`post_json`].
    #[instrument(skip_all)]
    pub async fn create_user(&self, input: &RegistrationInput) -> Result<ApiMessage, AppError> {
        let url = self.config.endpoint(USER_PATH);
        let response = post_json(&self.http, &url, &RegisterRequest::from(input)).await?;

        let status = response.status();
        let body: Value = read_json(response).await?;
        let reply = ApiMessage::from(&body);

        if !status.is_success() {
            warn!(status = status.as_u16(), "registration rejected");
            return Err(AppError::Http {
                status: status.as_u16(),
                message: reply
                    .message
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            });
        }

        debug!("user created");

        Ok(reply)
    }
}

fn login_status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNAUTHORIZED => INVALID_CREDENTIALS,
        StatusCode::BAD_REQUEST => BAD_REQUEST,
        _ => GENERIC_FAILURE,
    }
}
