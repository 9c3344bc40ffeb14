//! API endpoint configuration. The base URL is captured at build time from
//! `EGO_API_BASE_URL` and may be overridden at runtime (CLI flag or the same
//! environment variable). Configuration values are public; do not store secrets
//! here.

use super::errors::AppError;
use std::time::Duration;
use url::Url;

/// Default request timeout applied to every API call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const BUILD_API_BASE_URL: Option<&str> = option_env!("EGO_API_BASE_URL");

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    api_base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Builds a config around an explicit base URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the value is empty or not an absolute
    /// `http`/`https` URL.
    pub fn new(api_base_url: &str) -> Result<Self, AppError> {
        let base = normalize_value(api_base_url)
            .ok_or_else(|| AppError::Config("API base URL is not configured.".to_string()))?;

        let parsed = Url::parse(&base)
            .map_err(|err| AppError::Config(format!("Invalid API base URL {base}: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "API base URL must use http or https, got: {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            api_base_url: base.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Loads the base URL from the runtime override, falling back to the
    /// build-time value.
    ///
    /// # Errors
    /// Returns `AppError::Config` when neither source yields a usable URL.
    pub fn load(runtime_base_url: Option<&str>) -> Result<Self, AppError> {
        let base = resolve_base_url(runtime_base_url, BUILD_API_BASE_URL)
            .ok_or_else(|| AppError::Config("API base URL is not configured.".to_string()))?;
        Self::new(&base)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins an endpoint path onto the base URL, keeping any path prefix the
    /// base already carries (`https://host/v1` + `/sessions`).
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }
}

fn resolve_base_url(runtime: Option<&str>, build_time: Option<&str>) -> Option<String> {
    runtime
        .and_then(normalize_value)
        .or_else(|| build_time.and_then(normalize_value))
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
