//! Delivery secret generation.

use rand::RngCore;
use secrecy::SecretString;

#[cfg(test)]
#[path = "secret_tests.rs"]
mod tests;

/// Number of random bytes in a generated secret.
const SECRET_BYTES: usize = 32;

/// Generates a random delivery secret, hex encoded.
///
/// Used when no secret is configured. GitHub signs every delivery with the
/// secret, so it must be unguessable; the generator draws from the thread
/// CSPRNG.
pub fn generate_delivery_secret() -> SecretString {
    let mut bytes = [0u8; SECRET_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    SecretString::from(hex::encode(bytes))
}
