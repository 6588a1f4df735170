//! Tests for CLI configuration resolution.

use super::*;
use secrecy::ExposeSecret;
use std::collections::HashMap;

fn env_fixture(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn lookup(map: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
    move |name| map.get(name).cloned()
}

#[test]
fn test_missing_token_is_a_configuration_error() {
    let env = env_fixture(&[("JENKINS_URL", "https://ci.example.com")]);

    let result = RegistrarConfig::resolve("acme", "demo-app", None, &lookup(&env));

    match result {
        Err(Error::Config(message)) => {
            assert!(message.contains("GITHUB_TOKEN"));
        }
        other => panic!("Expected a configuration error, got {other:?}"),
    }
}

#[test]
fn test_empty_token_is_a_configuration_error() {
    let env = env_fixture(&[("GITHUB_TOKEN", "")]);

    let result = RegistrarConfig::resolve("acme", "demo-app", None, &lookup(&env));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_jenkins_url_argument_takes_precedence_over_environment() {
    let env = env_fixture(&[
        ("GITHUB_TOKEN", "ghp_token"),
        ("JENKINS_URL", "https://env.example.com"),
    ]);

    let config = RegistrarConfig::resolve(
        "acme",
        "demo-app",
        Some("https://arg.example.com"),
        &lookup(&env),
    )
    .unwrap();

    assert_eq!(config.jenkins_url, "https://arg.example.com");
}

#[test]
fn test_jenkins_url_falls_back_to_environment() {
    let env = env_fixture(&[
        ("GITHUB_TOKEN", "ghp_token"),
        ("JENKINS_URL", "https://env.example.com"),
    ]);

    let config = RegistrarConfig::resolve("acme", "demo-app", None, &lookup(&env)).unwrap();

    assert_eq!(config.jenkins_url, "https://env.example.com");
}

#[test]
fn test_jenkins_url_falls_back_to_default() {
    let env = env_fixture(&[("GITHUB_TOKEN", "ghp_token")]);

    let config = RegistrarConfig::resolve("acme", "demo-app", None, &lookup(&env)).unwrap();

    assert_eq!(config.jenkins_url, DEFAULT_JENKINS_URL);
}

#[test]
fn test_configured_secret_passes_through_untouched() {
    let env = env_fixture(&[
        ("GITHUB_TOKEN", "ghp_token"),
        ("WEBHOOK_SECRET", "operator-chosen-secret"),
    ]);

    let config = RegistrarConfig::resolve("acme", "demo-app", None, &lookup(&env)).unwrap();

    assert_eq!(config.webhook_secret.expose_secret(), "operator-chosen-secret");
    assert!(!config.secret_generated);
}

#[test]
fn test_missing_secret_is_generated() {
    let env = env_fixture(&[("GITHUB_TOKEN", "ghp_token")]);

    let config = RegistrarConfig::resolve("acme", "demo-app", None, &lookup(&env)).unwrap();

    assert!(config.secret_generated);
    let secret = config.webhook_secret.expose_secret();
    assert_eq!(secret.len(), 64);
    assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_empty_secret_is_replaced_with_a_generated_one() {
    // An empty secret would disable delivery verification; it must never be
    // passed through.
    let env = env_fixture(&[("GITHUB_TOKEN", "ghp_token"), ("WEBHOOK_SECRET", "")]);

    let config = RegistrarConfig::resolve("acme", "demo-app", None, &lookup(&env)).unwrap();

    assert!(config.secret_generated);
    assert!(!config.webhook_secret.expose_secret().is_empty());
}

#[test]
fn test_owner_and_repo_are_carried_through() {
    let env = env_fixture(&[("GITHUB_TOKEN", "ghp_token")]);

    let config = RegistrarConfig::resolve("acme", "demo-app", None, &lookup(&env)).unwrap();

    assert_eq!(config.owner, "acme");
    assert_eq!(config.repo, "demo-app");
    assert_eq!(config.github_token.expose_secret(), "ghp_token");
}
