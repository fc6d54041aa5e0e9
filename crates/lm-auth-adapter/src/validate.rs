use crate::AuthError;
use lm_api_types::SignupRequest;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Client-side signup checks, run before any request is sent.
///
/// Username and email are trimmed; the password is taken as typed and its
/// length counted in UTF-16 units, as the browser reports it.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    min_password_len: usize,
) -> Result<SignupRequest, AuthError> {
    let username = username.trim();
    let email = email.trim();

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if password.encode_utf16().count() < min_password_len {
        return Err(AuthError::PasswordTooShort {
            min: min_password_len,
        });
    }
    if !is_valid_email(email) {
        return Err(AuthError::InvalidEmail);
    }

    Ok(SignupRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}
