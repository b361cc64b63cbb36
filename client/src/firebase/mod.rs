//! Firebase application handle: configuration, auth client, data store.
//!
//! DESIGN
//! ======
//! [`FirebaseApp::initialize`] runs once at startup and the resulting handle
//! is passed down explicitly. It demands a [`DisplaySurface`], which can only
//! be acquired in the browser, so building the handle during server rendering
//! is rejected before any HTTP client exists.

pub mod auth;
pub mod config;
pub mod error;
pub mod store;


use std::sync::Arc;

pub use auth::{AuthClient, Authenticator};
pub use config::FirebaseConfig;
pub use error::{AuthError, AuthErrorKind, ConfigError, InitError};
pub use store::DataStore;

/// Proof that code is running with an interactive display attached.
#[derive(Debug, Clone, Copy)]
pub struct DisplaySurface {
    _private: (),
}

impl DisplaySurface {
    /// Acquire the browser display surface.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::NoDisplaySurface`] outside the hydrated browser
    /// build or when no `window` is available.
    pub fn acquire() -> Result<Self, InitError> {
        #[cfg(feature = "hydrate")]
        {
            if web_sys::window().is_some() {
                return Ok(Self { _private: () });
            }
            Err(InitError::NoDisplaySurface)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(InitError::NoDisplaySurface)
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self { _private: () }
    }
}

/// Constructed Firebase services shared by every page.
#[derive(Clone, Debug)]
pub struct FirebaseApp {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: FirebaseConfig,
    auth: AuthClient,
    store: DataStore,
}

impl FirebaseApp {
    /// Validate configuration from the build environment and construct the
    /// service handles.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Config`] naming missing keys, or
    /// [`InitError::NoDisplaySurface`] when called outside the browser.
    pub fn from_build_env() -> Result<Self, InitError> {
        let config = FirebaseConfig::from_build_env()?;
        let surface = DisplaySurface::acquire()?;
        Ok(Self::initialize(config, surface))
    }

    /// Construct the auth client and data store from validated config.
    pub fn initialize(config: FirebaseConfig, _surface: DisplaySurface) -> Self {
        let auth = AuthClient::new(&config);
        let store = DataStore::new(&config);
        log::info!(
            "firebase initialized: project={} auth_domain={}",
            config.project_id,
            config.auth_domain
        );
        Self { inner: Arc::new(Inner { config, auth, store }) }
    }

    pub fn config(&self) -> &FirebaseConfig {
        &self.inner.config
    }

    pub fn auth(&self) -> &AuthClient {
        &self.inner.auth
    }

    pub fn store(&self) -> &DataStore {
        &self.inner.store
    }
}
