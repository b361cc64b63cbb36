mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use config::HostConfig;
use error::ServeError;

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let result = run().await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "portal exited");
    }
    result
}

async fn run() -> Result<(), ServeError> {
    let host = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServeError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = host.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "portal listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
