//! GitHub webhook types and wire payloads.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// GitHub webhook event types.
///
/// Represents the repository events a webhook can subscribe to.
/// See [GitHub webhook events documentation](https://docs.github.com/en/webhooks/webhook-events-and-payloads).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEvent {
    /// Any Git push to a repository
    Push,
    /// Activity related to pull requests
    PullRequest,
    /// Branch or tag creation
    Create,
    /// Branch or tag deletion
    Delete,
    /// Activity related to GitHub releases
    Release,
    /// Activity related to commit statuses
    Status,
    /// All events (wildcard)
    #[serde(rename = "*")]
    All,
}

impl WebhookEvent {
    /// Converts the WebhookEvent to the string GitHub uses on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Release => "release",
            Self::Status => "status",
            Self::All => "*",
        }
    }
}

/// Webhook configuration details as the GitHub API represents them.
///
/// # Examples
///
/// ```rust
/// use github_client::HookConfig;
///
/// let config = HookConfig {
///     url: "https://ci.example.com/github-webhook/".to_string(),
///     content_type: "json".to_string(),
///     secret: Some("shared-secret".to_string()),
///     insecure_ssl: false, // Verify SSL (secure)
/// };
///
/// assert_eq!(config.content_type, "json");
/// assert!(!config.insecure_ssl);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HookConfig {
    /// Delivery URL the payloads are POSTed to
    pub url: String,

    /// Content type (json or form)
    pub content_type: String,

    /// Delivery secret used to sign payloads.
    ///
    /// GitHub never echoes the secret back, so this field is absent on
    /// responses and omitted from requests when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Whether to skip SSL certificate verification (insecure)
    ///
    /// - `false` (default): Verify SSL certificates (secure)
    /// - `true`: Skip SSL verification (insecure, not recommended)
    ///
    /// GitHub API uses string "0" (verify) or "1" (skip), but we expose as boolean.
    #[serde(
        default = "default_insecure_ssl",
        serialize_with = "serialize_insecure_ssl",
        deserialize_with = "deserialize_insecure_ssl"
    )]
    pub insecure_ssl: bool,
}

/// Default value for insecure_ssl field (secure by default).
fn default_insecure_ssl() -> bool {
    false
}

/// Serialize boolean to GitHub API format ("0" or "1").
fn serialize_insecure_ssl<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "1" } else { "0" })
}

/// Deserialize from GitHub API format ("0" or "1") to boolean.
fn deserialize_insecure_ssl<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s == "1")
}

/// A webhook as returned by the GitHub API.
///
/// Only the fields the registration flow consumes are modeled; serde
/// ignores the rest of GitHub's response.
///
/// # Examples
///
/// ```rust
/// use github_client::Hook;
///
/// let hook_json = r#"{
///     "id": 12345,
///     "active": true,
///     "events": ["push"],
///     "config": {
///         "url": "https://ci.example.com/github-webhook/",
///         "content_type": "json",
///         "insecure_ssl": "0"
///     }
/// }"#;
///
/// let hook: Hook = serde_json::from_str(hook_json).unwrap();
/// assert_eq!(hook.id, 12345);
/// assert!(hook.active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hook {
    /// GitHub-assigned webhook ID
    pub id: u64,

    /// Whether the webhook is active
    pub active: bool,

    /// Events that trigger the webhook
    pub events: Vec<WebhookEvent>,

    /// Webhook configuration details
    pub config: HookConfig,
}

/// Payload for `POST /repos/{owner}/{repo}/hooks`.
#[derive(Debug, Clone, Serialize)]
pub struct HookRequest {
    // GitHub only accepts "web" here; the constructor pins it.
    name: String,

    /// Webhook configuration details
    pub config: HookConfig,

    /// Events that trigger the webhook
    pub events: Vec<WebhookEvent>,

    /// Whether the webhook is active
    pub active: bool,
}

impl HookRequest {
    /// Creates a create-webhook payload for a standard `web` hook.
    pub fn new(config: HookConfig, events: Vec<WebhookEvent>, active: bool) -> Self {
        Self {
            name: "web".to_string(),
            config,
            events,
            active,
        }
    }
}

/// Payload for `PATCH /repos/{owner}/{repo}/hooks/{hook_id}`.
///
/// Unlike [`HookRequest`] this carries no `name` field; GitHub rejects
/// attempts to rename an existing hook.
#[derive(Debug, Clone, Serialize)]
pub struct HookUpdate {
    /// Webhook configuration details
    pub config: HookConfig,

    /// Events that trigger the webhook
    pub events: Vec<WebhookEvent>,

    /// Whether the webhook is active
    pub active: bool,
}

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;
