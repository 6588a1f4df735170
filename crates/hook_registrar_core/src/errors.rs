use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while registering the Jenkins webhook.
#[derive(Error, Debug)]
pub enum RegistrarError {
    /// The Jenkins base URL is not an absolute http(s) URL.
    ///
    /// The delivery URL is derived from the base URL before any network call,
    /// so a malformed base fails the run locally.
    #[error("Invalid Jenkins base URL `{url}`: {reason}")]
    InvalidJenkinsUrl {
        /// The value that failed to parse
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The delivery secret resolved to an empty string.
    ///
    /// GitHub would accept an empty secret, but deliveries could then not be
    /// verified by the receiver, so the registrar refuses to send one.
    #[error("The webhook delivery secret must not be empty")]
    EmptySecret,

    /// A GitHub API call failed.
    #[error(transparent)]
    Client(#[from] github_client::Error),
}
