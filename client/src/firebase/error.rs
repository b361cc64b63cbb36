//! Error types for configuration, client construction, and sign-in.
//!
//! ERROR HANDLING
//! ==============
//! `ConfigError` and `InitError` are fatal at startup. `AuthError` wraps the
//! opaque code reported by the identity platform and is only ever shown to
//! the user through [`AuthError::message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Transport failure reaching the identity platform.
pub const CODE_NETWORK: &str = "auth/network-request-failed";
/// Response body could not be understood.
pub const CODE_INTERNAL: &str = "auth/internal-error";
/// Sign-in attempted outside the browser build.
pub const CODE_UNSUPPORTED_ENVIRONMENT: &str = "auth/operation-not-supported-in-this-environment";

/// Required configuration values are absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required Firebase configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Authenticator handle could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Requested during server rendering or any other non-interactive context.
    #[error("Firebase client requested without a display surface (server rendering?)")]
    NoDisplaySurface,
}

/// User-facing classes of sign-in failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidCredential,
    InvalidEmail,
    RateLimited,
    Network,
    Misconfigured,
    Generic,
}

impl AuthErrorKind {
    /// Message shown in the toast and under the form.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidCredential => "Invalid email or password.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::RateLimited => "Too many attempts. Please wait a moment and try again.",
            Self::Network => "Network error. Check your connection and try again.",
            Self::Misconfigured => "Sign-in is not configured correctly. Please contact support.",
            Self::Generic => "Sign-in failed. Please try again.",
        }
    }
}

/// Sign-in rejection carrying the platform's opaque code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sign-in rejected: {code}")]
pub struct AuthError {
    code: String,
}

impl AuthError {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn network() -> Self {
        Self::new(CODE_NETWORK)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn kind(&self) -> AuthErrorKind {
        classify(&self.code)
    }

    pub fn message(&self) -> &'static str {
        self.kind().message()
    }
}

/// Map a platform code onto a [`AuthErrorKind`].
///
/// Accepts REST codes (`INVALID_PASSWORD`, `TOO_MANY_ATTEMPTS_TRY_LATER : ...`)
/// and SDK codes (`auth/wrong-password`). Unknown codes are `Generic`.
pub fn classify(code: &str) -> AuthErrorKind {
    let code = code.trim();
    // REST messages may carry a detail suffix after " : ".
    let head = code.split(" : ").next().unwrap_or(code).trim();

    if head.starts_with("API key not valid") {
        return AuthErrorKind::Misconfigured;
    }

    match head {
        "INVALID_PASSWORD"
        | "EMAIL_NOT_FOUND"
        | "INVALID_LOGIN_CREDENTIALS"
        | "USER_DISABLED"
        | "auth/wrong-password"
        | "auth/user-not-found"
        | "auth/invalid-credential"
        | "auth/invalid-login-credentials"
        | "auth/user-disabled" => AuthErrorKind::InvalidCredential,
        "INVALID_EMAIL" | "MISSING_EMAIL" | "auth/invalid-email" | "auth/missing-email" => {
            AuthErrorKind::InvalidEmail
        }
        "TOO_MANY_ATTEMPTS_TRY_LATER" | "auth/too-many-requests" => AuthErrorKind::RateLimited,
        CODE_NETWORK | "auth/timeout" => AuthErrorKind::Network,
        "CONFIGURATION_NOT_FOUND"
        | "PROJECT_NOT_FOUND"
        | "OPERATION_NOT_ALLOWED"
        | "PASSWORD_LOGIN_DISABLED"
        | "auth/invalid-api-key"
        | "auth/api-key-not-valid"
        | "auth/api-key-not-valid.-please-pass-a-valid-api-key."
        | "auth/configuration-not-found"
        | "auth/operation-not-allowed"
        | "auth/app-not-authorized" => AuthErrorKind::Misconfigured,
        _ => AuthErrorKind::Generic,
    }
}
