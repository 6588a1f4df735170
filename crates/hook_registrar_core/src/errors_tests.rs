//! Tests for the registrar error types.

use super::*;

#[test]
fn test_invalid_jenkins_url_display() {
    let error = RegistrarError::InvalidJenkinsUrl {
        url: "ci.example.com".to_string(),
        reason: "relative URL without a base".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid Jenkins base URL `ci.example.com`: relative URL without a base"
    );
}

#[test]
fn test_empty_secret_display() {
    assert_eq!(
        RegistrarError::EmptySecret.to_string(),
        "The webhook delivery secret must not be empty"
    );
}

#[test]
fn test_client_error_is_transparent() {
    let error = RegistrarError::from(github_client::Error::NotFound);
    assert_eq!(error.to_string(), "Resource not found");
    assert!(matches!(
        error,
        RegistrarError::Client(github_client::Error::NotFound)
    ));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RegistrarError>();
}
