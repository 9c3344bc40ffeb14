//! Session context shared by whatever performs authenticated calls after login.
//! It is passed explicitly instead of living in process-wide storage, and it
//! holds exactly one access token slot that later writes overwrite. Dropping
//! the last handle ends the session; `clear` ends it early (logout).

use super::types::SessionGrant;
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Storage key for the access token issued by `POST /sessions`.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionSlots>>,
}

#[derive(Debug, Default)]
struct SessionSlots {
    items: HashMap<String, SecretString>,
    user_id: Option<String>,
    role: Option<String>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under `key`, replacing any previous value.
    pub fn set_item(&self, key: &str, value: SecretString) {
        let mut slots = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        slots.items.insert(key.to_string(), value);
    }

    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<SecretString> {
        let slots = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        slots.items.get(key).cloned()
    }

    /// Records a successful login: token under [`ACCESS_TOKEN_KEY`] plus the
    /// non-secret user metadata.
    pub fn establish(&self, grant: &SessionGrant) {
        let mut slots = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        slots
            .items
            .insert(ACCESS_TOKEN_KEY.to_string(), grant.access_token.clone());
        slots.user_id = Some(grant.user_id.clone());
        slots.role.clone_from(&grant.role);
    }

    #[must_use]
    pub fn access_token(&self) -> Option<SecretString> {
        self.get_item(ACCESS_TOKEN_KEY)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        let slots = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        slots.user_id.clone()
    }

    #[must_use]
    pub fn role(&self) -> Option<String> {
        let slots = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        slots.role.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// `Authorization` header value for authenticated requests, marked
    /// sensitive so it is redacted from `Debug` output.
    #[must_use]
    pub fn bearer(&self) -> Option<HeaderValue> {
        let token = self.access_token()?;
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret())).ok()?;
        value.set_sensitive(true);
        Some(value)
    }

    /// Drops every stored value, typically on logout.
    pub fn clear(&self) {
        let mut slots = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slots = SessionSlots::default();
    }
}
