//! Create-or-update registration of the Jenkins webhook.

use github_client::{Error as GitHubError, WebhookClient};
use tracing::{info, instrument, warn};

use crate::errors::RegistrarError;
use crate::hook_spec::{HookSpec, WebhookTarget, JENKINS_HOOK_MARKER};

#[cfg(test)]
#[path = "registrar_tests.rs"]
mod tests;

/// Outcome of a registration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new webhook was created.
    Created {
        /// GitHub-assigned identifier of the new hook
        hook_id: u64,
    },

    /// An existing Jenkins-pointed webhook was updated in place.
    Updated {
        /// GitHub-assigned identifier of the updated hook
        hook_id: u64,
    },

    /// Create reported a conflict, but none of the registered hooks points at
    /// a Jenkins `github-webhook` endpoint. Nothing was changed.
    NoMatchingHook,
}

impl RegisterOutcome {
    /// Returns true if the repository now carries the desired webhook.
    pub fn is_converged(&self) -> bool {
        !matches!(self, Self::NoMatchingHook)
    }
}

/// Drives the create-or-update registration procedure.
///
/// Generic over [`WebhookClient`] so the control flow can be tested against a
/// recording mock instead of the live GitHub API.
pub struct Registrar<C> {
    client: C,
}

impl<C> Registrar<C>
where
    C: WebhookClient,
{
    /// Creates a registrar backed by the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Ensures one active webhook on `target` POSTs push events to the spec's
    /// delivery URL.
    ///
    /// # Behavior
    ///
    /// 1. Attempts to create the webhook with the desired configuration.
    /// 2. On conflict, lists the registered webhooks and updates the first
    ///    one whose delivery URL contains `github-webhook`.
    /// 3. When the conflict cannot be resolved to a matching hook, returns
    ///    [`RegisterOutcome::NoMatchingHook`] without touching the repository.
    ///
    /// # Errors
    ///
    /// Any non-conflict failure from create, and any failure from list or
    /// update, is returned as `RegistrarError::Client`. There are no retries;
    /// a failed run is expected to be re-invoked by the operator.
    #[instrument(skip(self, spec), fields(owner = %target.owner, repo = %target.repo))]
    pub async fn register(
        &self,
        target: &WebhookTarget,
        spec: &HookSpec,
    ) -> Result<RegisterOutcome, RegistrarError> {
        let create = spec.to_create_request();
        match self
            .client
            .create_webhook(&target.owner, &target.repo, &create)
            .await
        {
            Ok(hook) => {
                info!(
                    hook_id = hook.id,
                    url = spec.delivery_url(),
                    "Webhook created"
                );
                return Ok(RegisterOutcome::Created { hook_id: hook.id });
            }
            Err(GitHubError::HookAlreadyExists(_, _)) => {
                info!(
                    repository = target.full_name(),
                    "Webhook already exists, updating configuration"
                );
            }
            Err(e) => return Err(RegistrarError::Client(e)),
        }

        let hooks = self
            .client
            .list_webhooks(&target.owner, &target.repo)
            .await?;

        // First hook whose delivery URL contains the marker. A substring match,
        // so the hook is still found after the Jenkins base URL changes between
        // runs; see JENKINS_HOOK_MARKER for the trade-off.
        let existing = match hooks
            .iter()
            .find(|hook| hook.config.url.contains(JENKINS_HOOK_MARKER))
        {
            Some(hook) => hook,
            None => {
                warn!(
                    repository = target.full_name(),
                    marker = JENKINS_HOOK_MARKER,
                    "Create reported a conflict but no registered hook points at Jenkins; leaving the repository untouched"
                );
                return Ok(RegisterOutcome::NoMatchingHook);
            }
        };

        let update = spec.to_update_request();
        let updated = self
            .client
            .update_webhook(&target.owner, &target.repo, existing.id, &update)
            .await?;

        info!(
            hook_id = updated.id,
            url = spec.delivery_url(),
            "Webhook updated"
        );
        Ok(RegisterOutcome::Updated {
            hook_id: updated.id,
        })
    }
}
