//! # Ego (Session Bootstrap client)
//!
//! `ego` owns the two entry flows of the ego application: signing in and
//! creating an account. It keeps the flow logic out of any view layer so a
//! browser shell, a terminal, or a test can drive it the same way.
//!
//! ## Flows
//!
//! Both flows have the same shape:
//!
//! 1. **Form state:** field values, a transient status message and a busy flag.
//! 2. **Validation:** pure checks that run before any request is issued.
//! 3. **Submission:** a single JSON `POST` against the API base
//!    (`/sessions` for login, `/user` for registration).
//! 4. **Navigation:** on success the flow yields the next [`auth::Route`]
//!    instead of redirecting on its own.
//!
//! ## Session
//!
//! A successful login stores the access token in an explicitly passed
//! [`auth::SessionContext`]. Nothing is written to disk; the token lives as long
//! as the context does.

pub mod api;
pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
