use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the hook-registrar CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error raised while resolving arguments and environment.
    ///
    /// This error is returned before any network call is attempted, for
    /// example when the required GitHub token is missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The GitHub client could not be constructed.
    #[error(transparent)]
    GitHub(#[from] github_client::Error),

    /// The registration run itself failed.
    #[error(transparent)]
    Registrar(#[from] hook_registrar_core::RegistrarError),
}
