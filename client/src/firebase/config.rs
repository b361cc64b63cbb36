//! Firebase web-app configuration.
//!
//! Values are supplied through the environment when the WASM bundle is
//! built and baked in with `option_env!`. Validation is pure over a lookup
//! function so tests never touch the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use super::error::ConfigError;

pub const API_KEY: &str = "FIREBASE_API_KEY";
pub const AUTH_DOMAIN: &str = "FIREBASE_AUTH_DOMAIN";
pub const PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub const STORAGE_BUCKET: &str = "FIREBASE_STORAGE_BUCKET";
pub const MESSAGING_SENDER_ID: &str = "FIREBASE_MESSAGING_SENDER_ID";
pub const APP_ID: &str = "FIREBASE_APP_ID";
pub const MEASUREMENT_ID: &str = "FIREBASE_MEASUREMENT_ID";

/// Keys that must be present, in reporting order.
pub const REQUIRED_KEYS: [&str; 6] =
    [API_KEY, AUTH_DOMAIN, PROJECT_ID, STORAGE_BUCKET, MESSAGING_SENDER_ID, APP_ID];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: Option<String>,
}

impl FirebaseConfig {
    /// Build config from values compiled in at build time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every absent required key.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            API_KEY => option_env!("FIREBASE_API_KEY"),
            AUTH_DOMAIN => option_env!("FIREBASE_AUTH_DOMAIN"),
            PROJECT_ID => option_env!("FIREBASE_PROJECT_ID"),
            STORAGE_BUCKET => option_env!("FIREBASE_STORAGE_BUCKET"),
            MESSAGING_SENDER_ID => option_env!("FIREBASE_MESSAGING_SENDER_ID"),
            APP_ID => option_env!("FIREBASE_APP_ID"),
            MEASUREMENT_ID => option_env!("FIREBASE_MEASUREMENT_ID"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Blank values count as missing. Nothing is constructed unless every
    /// required key resolves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every absent required key.
    pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        let missing: Vec<&'static str> =
            REQUIRED_KEYS.into_iter().filter(|key| value(*key).is_none()).collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let required = |key: &str| value(key).unwrap_or_default();
        Ok(Self {
            api_key: required(API_KEY),
            auth_domain: required(AUTH_DOMAIN),
            project_id: required(PROJECT_ID),
            storage_bucket: required(STORAGE_BUCKET),
            messaging_sender_id: required(MESSAGING_SENDER_ID),
            app_id: required(APP_ID),
            measurement_id: value(MEASUREMENT_ID),
        })
    }
}
