//! Client-side input rules checked before any request is issued. Rules run in
//! a fixed order and the first violation wins, so users always see one message
//! at a time. Values are checked as typed; nothing is trimmed here.

use regex::Regex;
use thiserror::Error;

// Limits are in UTF-16 code units, the unit browser forms report as a
// string's length. A non-BMP character such as an emoji counts as two.
pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 30;
pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 30;
pub const EMAIL_MAX_CHARS: usize = 30;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Password must be at most 30 characters long")]
    PasswordTooLong,
    #[error("Username must be at least 3 characters long")]
    UsernameTooShort,
    #[error("Username must be at most 30 characters long")]
    UsernameTooLong,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Email must be at most 30 characters long")]
    EmailTooLong,
}

fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Loose `text@text.text` shape check; the server stays the authority.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"\S+@\S+\.\S+").is_ok_and(|re| re.is_match(email))
}

/// Login only requires both fields to be present.
///
/// # Errors
/// Returns `ValidationError::MissingFields` if either value is empty.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Registration rules: presence, password length, username length, email
/// shape, then email length.
///
/// # Errors
/// Returns the first violated rule.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let password_len = text_len(password);
    if password_len < PASSWORD_MIN_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    if password_len > PASSWORD_MAX_CHARS {
        return Err(ValidationError::PasswordTooLong);
    }

    let username_len = text_len(username);
    if username_len < USERNAME_MIN_CHARS {
        return Err(ValidationError::UsernameTooShort);
    }
    if username_len > USERNAME_MAX_CHARS {
        return Err(ValidationError::UsernameTooLong);
    }

    if !valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if text_len(email) > EMAIL_MAX_CHARS {
        return Err(ValidationError::EmailTooLong);
    }

    Ok(())
}
