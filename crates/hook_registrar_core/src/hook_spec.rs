//! Desired webhook state for a target repository.

use github_client::{HookConfig, HookRequest, HookUpdate, WebhookEvent};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::errors::RegistrarError;

/// Path GitHub must deliver to on the Jenkins side.
///
/// Jenkins's GitHub plugin listens on this fixed endpoint.
pub const JENKINS_WEBHOOK_PATH: &str = "github-webhook/";

/// Substring used to recognize an existing Jenkins-pointed hook.
///
/// Matching is deliberately loose so a hook registered against an older
/// Jenkins base URL is still found and updated instead of duplicated. The
/// flip side is that an unrelated hook whose URL happens to contain the
/// substring would match too.
pub const JENKINS_HOOK_MARKER: &str = "github-webhook";

#[cfg(test)]
#[path = "hook_spec_tests.rs"]
mod tests;

/// Identifies the GitHub repository a webhook is managed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookTarget {
    /// Repository owner (user or organization name)
    pub owner: String,

    /// Repository name
    pub repo: String,
}

impl WebhookTarget {
    /// Creates a target from owner and repository name.
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    /// Returns the `owner/repo` form used in log output.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// The webhook state a registration run converges the repository to.
///
/// The delivery URL is derived from the Jenkins base URL; content type,
/// event set, TLS verification, and active flag are fixed. The secret is
/// redacted from `Debug` output.
#[derive(Debug)]
pub struct HookSpec {
    delivery_url: String,
    secret: SecretString,
}

impl HookSpec {
    /// Builds the desired hook state from a Jenkins base URL and a delivery secret.
    ///
    /// The delivery URL is `{jenkins_url}/github-webhook/`; a trailing slash
    /// on the base is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `RegistrarError::InvalidJenkinsUrl` when the base is not an
    /// absolute http(s) URL, and `RegistrarError::EmptySecret` when the
    /// secret is empty.
    pub fn new(jenkins_url: &str, secret: SecretString) -> Result<Self, RegistrarError> {
        let parsed = Url::parse(jenkins_url).map_err(|e| RegistrarError::InvalidJenkinsUrl {
            url: jenkins_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RegistrarError::InvalidJenkinsUrl {
                url: jenkins_url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        if secret.expose_secret().is_empty() {
            return Err(RegistrarError::EmptySecret);
        }

        let delivery_url = format!(
            "{}/{}",
            jenkins_url.trim_end_matches('/'),
            JENKINS_WEBHOOK_PATH
        );

        Ok(Self {
            delivery_url,
            secret,
        })
    }

    /// The URL GitHub will POST push payloads to.
    pub fn delivery_url(&self) -> &str {
        &self.delivery_url
    }

    pub(crate) fn to_create_request(&self) -> HookRequest {
        HookRequest::new(self.hook_config(), vec![WebhookEvent::Push], true)
    }

    pub(crate) fn to_update_request(&self) -> HookUpdate {
        HookUpdate {
            config: self.hook_config(),
            events: vec![WebhookEvent::Push],
            active: true,
        }
    }

    fn hook_config(&self) -> HookConfig {
        HookConfig {
            url: self.delivery_url.clone(),
            content_type: "json".to_string(),
            secret: Some(self.secret.expose_secret().to_string()),
            insecure_ssl: false,
        }
    }
}
