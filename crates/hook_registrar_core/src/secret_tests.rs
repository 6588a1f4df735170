//! Tests for delivery secret generation.

use super::*;
use secrecy::ExposeSecret;

#[test]
fn test_generated_secret_is_64_hex_chars() {
    let secret = generate_delivery_secret();
    let exposed = secret.expose_secret();
    assert_eq!(exposed.len(), 64, "32 bytes hex-encode to 64 chars");
    assert!(exposed.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_generated_secrets_are_unique() {
    let first = generate_delivery_secret();
    let second = generate_delivery_secret();
    assert_ne!(first.expose_secret(), second.expose_secret());
}
