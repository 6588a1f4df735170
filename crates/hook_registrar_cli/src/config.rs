//! Configuration management for the hook-registrar CLI.
//!
//! The configuration surface is small: the repository comes from command-line
//! arguments, everything else from environment variables. Resolution happens
//! against an injected lookup function so tests can supply fixtures without
//! mutating the process environment.

use hook_registrar_core::generate_delivery_secret;
use secrecy::SecretString;
use tracing::{debug, info};

use crate::errors::Error;

/// Environment variable holding the GitHub personal access token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable holding the Jenkins base URL.
pub const JENKINS_URL_VAR: &str = "JENKINS_URL";

/// Environment variable holding the webhook delivery secret.
pub const WEBHOOK_SECRET_VAR: &str = "WEBHOOK_SECRET";

/// Fallback Jenkins base URL when neither `--jenkins-url` nor `JENKINS_URL`
/// is set.
pub const DEFAULT_JENKINS_URL: &str = "https://sourabh-jenkins.techis.store";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Resolved configuration for a registration run.
///
/// Secrets are stored as [`SecretString`] so `Debug` output redacts them.
#[derive(Debug)]
pub struct RegistrarConfig {
    /// Repository owner (user or organization name)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Jenkins base URL the delivery URL is derived from
    pub jenkins_url: String,

    /// GitHub personal access token
    pub github_token: SecretString,

    /// Webhook delivery secret
    pub webhook_secret: SecretString,

    /// Whether the secret was generated for this run rather than configured
    pub secret_generated: bool,
}

impl RegistrarConfig {
    /// Resolves configuration from arguments and an environment lookup.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner from the command line.
    /// * `repo` - Repository name from the command line.
    /// * `jenkins_url_arg` - Optional `--jenkins-url` override.
    /// * `env` - Environment variable lookup. Production code passes a
    ///   wrapper over `std::env::var`; tests pass a fixture map.
    ///
    /// # Behaviour
    ///
    /// - `GITHUB_TOKEN` is required; a missing or empty value is a
    ///   configuration error and nothing else is resolved.
    /// - The Jenkins URL is taken from the argument, then `JENKINS_URL`,
    ///   then the compiled-in default.
    /// - A missing or empty `WEBHOOK_SECRET` yields a freshly generated
    ///   random secret; an empty secret is never passed through.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when the GitHub token is absent.
    pub fn resolve(
        owner: &str,
        repo: &str,
        jenkins_url_arg: Option<&str>,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, Error> {
        let github_token = env(GITHUB_TOKEN_VAR)
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
            .ok_or_else(|| {
                Error::Config(format!(
                    "{} environment variable is required",
                    GITHUB_TOKEN_VAR
                ))
            })?;

        let jenkins_url = jenkins_url_arg
            .map(str::to_string)
            .or_else(|| env(JENKINS_URL_VAR).filter(|url| !url.is_empty()))
            .unwrap_or_else(|| {
                debug!(default = DEFAULT_JENKINS_URL, "No Jenkins URL configured, using default");
                DEFAULT_JENKINS_URL.to_string()
            });

        let (webhook_secret, secret_generated) =
            match env(WEBHOOK_SECRET_VAR).filter(|secret| !secret.is_empty()) {
                Some(secret) => (SecretString::from(secret), false),
                None => {
                    info!("No webhook secret configured, generating a random one");
                    (generate_delivery_secret(), true)
                }
            };

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            jenkins_url,
            github_token,
            webhook_secret,
            secret_generated,
        })
    }

    /// Resolves configuration from the process environment.
    pub fn from_env(
        owner: &str,
        repo: &str,
        jenkins_url_arg: Option<&str>,
    ) -> Result<Self, Error> {
        Self::resolve(owner, repo, jenkins_url_arg, &|name| {
            std::env::var(name).ok()
        })
    }
}
