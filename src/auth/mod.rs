//! Auth feature module covering the login and registration flows and the
//! session context they feed. It keeps flow logic out of any view layer and
//! touches credentials and tokens, so it must avoid logging secrets.
//!
//! Flow Overview: Login validates presence, posts to `/sessions`, stores the
//! access token, and yields the user's dashboard route. Registration validates
//! lengths and email shape, posts to `/user`, and yields the login route.

pub mod client;
pub mod form;
pub mod login;
pub mod navigator;
pub mod register;
pub mod session;
pub mod types;
pub mod validation;

pub use client::AuthClient;
pub use form::{BusyFlag, FormEvent, FormState, SubmitOutcome};
pub use login::{LoginField, LoginForm};
pub use navigator::Route;
pub use register::{RegisterField, RegisterForm};
pub use session::{ACCESS_TOKEN_KEY, SessionContext};
pub use types::{ApiMessage, Credentials, RegistrationInput, SessionGrant};
pub use validation::ValidationError;
