//! Operator session token helpers.
//!
//! Session tokens are opaque random strings; only their SHA-256 hash is
//! stored server-side so a database leak does not compromise active
//! sessions. The operator credential itself is compared through SHA-256
//! digests so the comparison does not short-circuit on the first differing
//! byte.

use appraisal_core::token::generate_token;
use sha2::{Digest, Sha256};

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the operator; only the hash should be persisted server-side.
pub fn generate_session_token() -> (String, String) {
    let plaintext = generate_token();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming session token against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compare a presented credential against the configured operator secret.
///
/// Both sides are reduced to fixed-length digests before comparison, so the
/// running time does not depend on where the strings first differ.
pub fn credential_matches(presented: &str, configured: &str) -> bool {
    let presented_digest = Sha256::digest(presented.as_bytes());
    let configured_digest = Sha256::digest(configured.as_bytes());
    presented_digest == configured_digest
}
