//! Axum host for the Lexi legal assistant UI.
//!
//! Renders the Leptos app with SSR and serves the hydration bundle. There is
//! no chat API: the assistant runs entirely in the browser.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "lexi server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, "lexi listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
