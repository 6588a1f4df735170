//! Implementation of the `register` command.

use clap::Args;
use github_client::{create_token_client, GitHubClient};
use hook_registrar_core::{HookSpec, RegisterOutcome, Registrar, WebhookTarget};
use secrecy::ExposeSecret;

use crate::config::RegistrarConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "register_cmd_tests.rs"]
mod tests;

/// Arguments for the `register` command.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Repository owner (user or organization)
    #[arg(long)]
    pub owner: String,

    /// Repository name
    #[arg(long)]
    pub repo: String,

    /// Jenkins base URL; falls back to JENKINS_URL, then the built-in default
    #[arg(long)]
    pub jenkins_url: Option<String>,
}

/// Runs one registration pass against the live GitHub API.
///
/// # Errors
///
/// Returns an error when the desired hook state cannot be built from the
/// configuration, when the GitHub client cannot be constructed, or when a
/// remote call fails. The no-match-on-conflict case is not an error here;
/// it is reported through [`RegisterOutcome::NoMatchingHook`] and mapped to
/// an exit status by the caller.
pub async fn execute(config: RegistrarConfig) -> Result<RegisterOutcome, Error> {
    let spec = HookSpec::new(&config.jenkins_url, config.webhook_secret)?;
    let octocrab = create_token_client(config.github_token.expose_secret())?;
    let registrar = Registrar::new(GitHubClient::new(octocrab));
    let target = WebhookTarget::new(&config.owner, &config.repo);

    let outcome = registrar.register(&target, &spec).await?;
    Ok(outcome)
}
