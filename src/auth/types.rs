//! Request and response types for the session and user endpoints. Passwords and
//! access tokens are wrapped in `SecretString` so `Debug` output never shows
//! them; request bodies borrow the exposed value only while serializing.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Login form input.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

/// Registration form input.
#[derive(Clone, Debug)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a RegistrationInput> for RegisterRequest<'a> {
    fn from(input: &'a RegistrationInput) -> Self {
        Self {
            username: &input.username,
            email: &input.email,
            password: input.password.expose_secret(),
        }
    }
}

/// Wire shape of `POST /sessions` on success. Kept private so the raw token
/// never escapes without being wrapped.
#[derive(Deserialize)]
pub(crate) struct LoginResponse {
    id: UserId,
    #[serde(default, deserialize_with = "string_or_none")]
    role: Option<String>,
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// Login only depends on `id` and `accessToken`; a `role` of any other JSON
/// type is dropped instead of failing the whole response.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(role) => Some(role),
        _ => None,
    })
}

/// The API has returned user ids both as strings and as integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserId {
    Text(String),
    Number(serde_json::Number),
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        match id {
            UserId::Text(value) => value,
            UserId::Number(value) => value.to_string(),
        }
    }
}

/// Result of a successful login.
#[derive(Clone, Debug)]
pub struct SessionGrant {
    pub user_id: String,
    pub role: Option<String>,
    pub access_token: SecretString,
}

impl From<LoginResponse> for SessionGrant {
    fn from(response: LoginResponse) -> Self {
        Self {
            user_id: response.id.into(),
            role: response.role,
            access_token: SecretString::from(response.access_token),
        }
    }
}

/// Body of `POST /user`. Only `message` is meaningful to the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiMessage {
    pub message: Option<String>,
}

impl From<&Value> for ApiMessage {
    fn from(body: &Value) -> Self {
        let message = match body.get("message") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        Self { message }
    }
}
