//! REST calls to the Identity Toolkit API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an unsupported-environment error since
//! sign-in is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into an [`AuthError`] code: transport errors become
//! `auth/network-request-failed`, unparseable bodies `auth/internal-error`, and
//! platform rejections keep the platform's own code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ErrorEnvelope, SignInResponse, User};
use crate::firebase::error::{AuthError, CODE_INTERNAL};

pub const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Full `accounts:signInWithPassword` endpoint for `api_key`.
pub fn sign_in_url(base_url: &str, api_key: &str) -> String {
    format!("{}/accounts:signInWithPassword?key={api_key}", base_url.trim_end_matches('/'))
}

/// Exchange an email/password pair for a [`User`].
///
/// # Errors
///
/// Returns the platform's rejection code, or a synthetic code for transport
/// and parse failures.
pub async fn sign_in_with_password(url: &str, email: &str, password: &str) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::SignInRequest { email, password, return_secure_token: true };
        let resp = gloo_net::http::Request::post(url)
            .json(&body)
            .map_err(|e| {
                log::error!("sign-in request build failed: {e}");
                AuthError::new(CODE_INTERNAL)
            })?
            .send()
            .await
            .map_err(|e| {
                log::warn!("sign-in transport failed: {e}");
                AuthError::network()
            })?;
        let status = resp.status();
        let text = resp.text().await.map_err(|_| AuthError::network())?;
        parse_sign_in_response(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, email, password);
        Err(AuthError::new(crate::firebase::error::CODE_UNSUPPORTED_ENVIRONMENT))
    }
}

/// Interpret a sign-in response body.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn parse_sign_in_response(status: u16, body: &str) -> Result<User, AuthError> {
    if (200..300).contains(&status) {
        let resp: SignInResponse =
            serde_json::from_str(body).map_err(|_| AuthError::new(CODE_INTERNAL))?;
        return User::try_from(resp).map_err(|e| {
            log::warn!("sign-in response had an invalid expiresIn: {e}");
            AuthError::new(CODE_INTERNAL)
        });
    }

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(env) => {
            log::debug!("sign-in rejected: status={status} http_code={}", env.error.code);
            Err(AuthError::new(env.error.message))
        }
        Err(_) => Err(AuthError::new(CODE_INTERNAL)),
    }
}
