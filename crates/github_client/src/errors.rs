//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. Conflict responses get their own variant so callers can
//! branch on "the webhook already exists" without string-matching error messages.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// This enum represents the error conditions the webhook operations can produce,
/// including authentication failures, conflicts, and data processing issues.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.create_webhook("owner", "repo", &payload).await {
///     Ok(hook) => println!("Webhook created: {}", hook.id),
///     Err(Error::HookAlreadyExists(owner, repo)) => {
///         println!("{}/{} already has this webhook", owner, repo)
///     }
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when the client cannot be constructed from the
    /// provided credential, for example when the token is malformed.
    /// The contained string provides specific details about the failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    ///
    /// This error occurs when the GitHub API returns a response that cannot be
    /// parsed into the expected data structure.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The repository already has a webhook with the requested configuration.
    ///
    /// GitHub reports this as HTTP 422 on create. It is not fatal: callers are
    /// expected to look up the existing hook and update it in place.
    ///
    /// Parameters: (owner, repository)
    #[error("A webhook already exists for repository: {0}/{1}")]
    HookAlreadyExists(String, String),

    /// The GitHub API returned a response in an unexpected format, or the
    /// request failed for a reason the client does not model explicitly.
    ///
    /// The underlying octocrab error is logged in full before this variant
    /// is returned.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status code,
    /// indicating that the repository or webhook does not exist or is not
    /// accessible with the current authentication.
    #[error("Resource not found")]
    NotFound,
}
