//! Identity Toolkit wire DTOs and the user record handed to the session.
//!
//! DESIGN
//! ======
//! Wire structs mirror the REST payloads field-for-field (`camelCase`) and stay
//! private to `net`; pages and state only see [`User`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Signed-in user as affirmed by the identity platform.
///
/// Treated as opaque by pages; only `email` is ever rendered.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Platform-assigned user id (`localId`).
    pub uid: String,
    /// Email address the account signed in with.
    pub email: String,
    /// Profile display name, when one is set.
    pub display_name: Option<String>,
    /// Short-lived ID token.
    pub id_token: String,
    /// Long-lived token used to mint new ID tokens.
    pub refresh_token: String,
    /// ID token lifetime in seconds.
    pub expires_in_secs: u64,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("id_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_in_secs", &self.expires_in_secs)
            .finish()
    }
}

/// Body of `accounts:signInWithPassword`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// Successful `accounts:signInWithPassword` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInResponse {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    /// Seconds, encoded as a decimal string.
    pub expires_in: String,
}

impl TryFrom<SignInResponse> for User {
    type Error = std::num::ParseIntError;

    /// Fails when `expiresIn` is not a whole number of seconds.
    fn try_from(resp: SignInResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            expires_in_secs: resp.expires_in.trim().parse()?,
            uid: resp.local_id,
            email: resp.email,
            display_name: resp.display_name.filter(|name| !name.is_empty()),
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
        })
    }
}

/// Error envelope returned with any non-2xx status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    /// Platform error code, sometimes followed by `" : detail"`.
    pub message: String,
}
