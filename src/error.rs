//! Startup errors for the page host.

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// `PORT` is set but not a valid port number.
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
