//! Signup, login and logout for the storefront auth drawer.
//!
//! The flows never touch the DOM. They talk to an [`AuthBackend`], update the
//! [`SessionCache`](lm_session::SessionCache) and return the [`Effect`]s the
//! page must apply, in order.

mod flow;
mod validate;

pub use flow::{AuthFlow, Effect, FlowSettings};
pub use validate::{is_valid_email, validate_signup};

use anyhow::Result;
use async_trait::async_trait;
use lm_api_types::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use lm_storefront_core::toast::Toast;
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("{0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

impl AuthError {
    /// Text shown to the shopper. Transport details stay in the log.
    pub fn toast(&self) -> Toast {
        match self {
            AuthError::Transport(_) => Toast::error(GENERIC_FAILURE),
            other => Toast::error(other.to_string()),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::MissingFields | AuthError::PasswordTooShort { .. } | AuthError::InvalidEmail
        )
    }
}

/// The `/signup` and `/login` endpoints. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn signup(&self, req: &SignupRequest) -> Result<SignupResponse>;
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse>;
}
