//! Authenticator seam and the Identity Toolkit implementation behind it.

use super::config::FirebaseConfig;
use super::error::AuthError;
use crate::net::api;
use crate::net::types::User;

/// Validates an email/password pair with the identity platform.
#[async_trait::async_trait(?Send)]
pub trait Authenticator {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;
}

/// Email/password authenticator backed by `accounts:signInWithPassword`.
#[derive(Debug, Clone)]
pub struct AuthClient {
    sign_in_url: String,
}

impl AuthClient {
    pub fn new(config: &FirebaseConfig) -> Self {
        Self::with_base_url(config, api::IDENTITY_TOOLKIT_URL)
    }

    /// Point the client at an alternative Identity Toolkit root (emulator).
    pub fn with_base_url(config: &FirebaseConfig, base_url: &str) -> Self {
        Self { sign_in_url: api::sign_in_url(base_url, &config.api_key) }
    }

    pub fn sign_in_url(&self) -> &str {
        &self.sign_in_url
    }
}

#[async_trait::async_trait(?Send)]
impl Authenticator for AuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        api::sign_in_with_password(&self.sign_in_url, email, password).await
    }
}
