//! Startup and serving errors for the host process.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
