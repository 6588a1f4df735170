//! # Hook Registrar Core
//!
//! This crate provides the core logic for hook-registrar, a tool that points a
//! GitHub repository webhook at a Jenkins server's `/github-webhook/` endpoint.
//!
//! ## Overview
//!
//! A registration run converges the repository to a single desired webhook:
//! 1. Attempt to create the webhook with the desired configuration
//! 2. On conflict (the hook already exists), list the registered webhooks
//! 3. Update the first hook that points at a Jenkins `github-webhook` endpoint
//!
//! The run is sequential and one-shot: every remote call is awaited before the
//! next, and any non-conflict API failure ends the run without retries.
//!
//! ## Main Types
//!
//! - [`Registrar`] - drives the create-or-update procedure
//! - [`HookSpec`] - the desired webhook state (delivery URL, secret, events)
//! - [`WebhookTarget`] - the repository the webhook is managed on
//! - [`RegisterOutcome`] - what a run did: created, updated, or found nothing to update
//!
//! ## Examples
//!
//! ```no_run
//! use github_client::{create_token_client, GitHubClient};
//! use hook_registrar_core::{HookSpec, Registrar, WebhookTarget};
//! use secrecy::SecretString;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let octocrab = create_token_client("ghp_token")?;
//! let registrar = Registrar::new(GitHubClient::new(octocrab));
//!
//! let target = WebhookTarget::new("acme", "demo-app");
//! let spec = HookSpec::new(
//!     "https://ci.example.com",
//!     SecretString::from("shared-secret".to_string()),
//! )?;
//!
//! let outcome = registrar.register(&target, &spec).await?;
//! println!("Run finished: {:?}", outcome);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The registrar is generic over [`github_client::WebhookClient`] so tests can
//! inject a recording mock instead of the live API.

mod errors;
pub use errors::RegistrarError;

mod hook_spec;
pub use hook_spec::{HookSpec, WebhookTarget, JENKINS_HOOK_MARKER, JENKINS_WEBHOOK_PATH};

mod registrar;
pub use registrar::{RegisterOutcome, Registrar};

mod secret;
pub use secret::generate_delivery_secret;
