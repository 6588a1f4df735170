//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub's
//! repository webhook endpoints, authenticating with a personal access token.
//! The [`WebhookClient`] trait is the seam consumers program against so the
//! network can be mocked out in tests.

use async_trait::async_trait;
use http::StatusCode;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod webhook;
pub use webhook::{Hook, HookConfig, HookRequest, HookUpdate, WebhookEvent};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A client for interacting with the GitHub API, authenticated with a token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Wraps an already-authenticated `Octocrab` instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

/// Trait for repository webhook operations.
///
/// Implemented by [`GitHubClient`] against the live API; test code provides
/// its own implementations with canned responses.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// Creates a webhook on a repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    /// * `payload` - The desired webhook configuration, events, and active flag.
    ///
    /// # Errors
    ///
    /// Returns `Error::HookAlreadyExists` when GitHub answers the create with
    /// HTTP 422, `Error::NotFound` when the repository does not exist, and
    /// `Error::InvalidResponse` for any other API failure.
    async fn create_webhook(
        &self,
        owner: &str,
        repo: &str,
        payload: &HookRequest,
    ) -> Result<Hook, Error>;

    /// Lists all webhooks registered on a repository.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` when the repository does not exist and
    /// `Error::InvalidResponse` for any other API failure.
    async fn list_webhooks(&self, owner: &str, repo: &str) -> Result<Vec<Hook>, Error>;

    /// Updates an existing webhook's configuration, events, and active flag.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    /// * `hook_id` - The GitHub-assigned identifier of the hook to update.
    /// * `payload` - The desired webhook state.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` when the repository or hook does not exist
    /// and `Error::InvalidResponse` for any other API failure.
    async fn update_webhook(
        &self,
        owner: &str,
        repo: &str,
        hook_id: u64,
        payload: &HookUpdate,
    ) -> Result<Hook, Error>;
}

#[async_trait]
impl WebhookClient for GitHubClient {
    #[instrument(skip(self, payload), fields(owner = %owner, repo = %repo))]
    async fn create_webhook(
        &self,
        owner: &str,
        repo: &str,
        payload: &HookRequest,
    ) -> Result<Hook, Error> {
        let path = format!("/repos/{}/{}/hooks", owner, repo);
        let response: OctocrabResult<Hook> = self.client.post(path, Some(payload)).await;
        match response {
            Ok(hook) => {
                info!(hook_id = hook.id, "Created webhook");
                Ok(hook)
            }
            Err(e) => match error_status(&e) {
                Some(StatusCode::UNPROCESSABLE_ENTITY) => {
                    info!(
                        owner = owner,
                        repo = repo,
                        "GitHub reported the webhook already exists"
                    );
                    Err(Error::HookAlreadyExists(owner.to_string(), repo.to_string()))
                }
                Some(StatusCode::NOT_FOUND) => {
                    error!(owner = owner, repo = repo, "Repository not found");
                    Err(Error::NotFound)
                }
                _ => {
                    log_octocrab_error("Failed to create webhook", e);
                    Err(Error::InvalidResponse)
                }
            },
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_webhooks(&self, owner: &str, repo: &str) -> Result<Vec<Hook>, Error> {
        let path = format!("/repos/{}/{}/hooks", owner, repo);
        let response: OctocrabResult<Vec<Hook>> = self.client.get(path, None::<&()>).await;
        match response {
            Ok(hooks) => {
                info!(count = hooks.len(), "Retrieved repository webhooks");
                Ok(hooks)
            }
            Err(e) => match error_status(&e) {
                Some(StatusCode::NOT_FOUND) => {
                    error!(owner = owner, repo = repo, "Repository not found");
                    Err(Error::NotFound)
                }
                _ => {
                    log_octocrab_error("Failed to list webhooks", e);
                    Err(Error::InvalidResponse)
                }
            },
        }
    }

    #[instrument(skip(self, payload), fields(owner = %owner, repo = %repo, hook_id))]
    async fn update_webhook(
        &self,
        owner: &str,
        repo: &str,
        hook_id: u64,
        payload: &HookUpdate,
    ) -> Result<Hook, Error> {
        let path = format!("/repos/{}/{}/hooks/{}", owner, repo, hook_id);
        let response: OctocrabResult<Hook> = self.client.patch(path, Some(payload)).await;
        match response {
            Ok(hook) => {
                info!(hook_id = hook.id, "Updated webhook");
                Ok(hook)
            }
            Err(e) => match error_status(&e) {
                Some(StatusCode::NOT_FOUND) => {
                    error!(
                        owner = owner,
                        repo = repo,
                        hook_id,
                        "Webhook or repository not found"
                    );
                    Err(Error::NotFound)
                }
                _ => {
                    log_octocrab_error("Failed to update webhook", e);
                    Err(Error::InvalidResponse)
                }
            },
        }
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - A GitHub personal access token with `admin:repo_hook` scope.
///
/// # Errors
/// Returns an `Error::AuthError` if the client cannot be built from the token.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build GitHub client: {}", e)))
}

/// Extracts the HTTP status from an octocrab error, when it carries one.
fn error_status(e: &octocrab::Error) -> Option<StatusCode> {
    match e {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code),
        _ => None,
    }
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                error_message = err.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
