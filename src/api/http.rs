//! HTTP helpers for the JSON API with a consistent timeout and error mapping.
//! Auth clients use these helpers so request setup lives in one place. The
//! helpers never log request bodies; callers pass credentials through them.

use super::{config::ApiConfig, errors::AppError};
use crate::APP_USER_AGENT;
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

/// Builds the shared HTTP client with the user agent and request timeout.
///
/// # Errors
/// Returns `AppError::Config` if the TLS backend cannot be initialized.
pub fn build_client(config: &ApiConfig) -> Result<Client, AppError> {
    Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(config.timeout())
        .build()
        .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))
}

/// Posts a JSON body and returns the raw response, whatever its status.
///
/// # Errors
/// Returns `AppError::Serialization` if the body cannot be encoded and
/// `AppError::Network`/`AppError::Timeout` if the request never completes.
pub async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<Response, AppError> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(map_request_error)?;

    debug!(status = response.status().as_u16(), "response received");

    Ok(response)
}

/// Parses the response body as JSON without looking at the status code.
///
/// # Errors
/// Returns `AppError::Parse` if the body is unreadable or has the wrong shape.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await.map_err(map_request_error)?;
    serde_json::from_slice(&bytes)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Maps transport errors into `AppError` variants with timeout detection. A
/// body that fails to encode surfaces here as a builder error.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}
