//! Capability token generation.
//!
//! A retrieval token is the sole authentication mechanism for anonymous
//! result viewing, so it must be unguessable online: 32 alphanumeric
//! characters sampled from the thread-local CSPRNG carry just over 190 bits
//! of randomness, comfortably above the 128-bit floor. Generation is pure;
//! uniqueness is enforced by the store's unique constraint, and a collision
//! there is a retryable condition, not a generator failure.

use rand::Rng;

/// Fixed length of every capability token.
pub const TOKEN_LEN: usize = 32;

/// Generate a new random retrieval token.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_shape() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_no_collisions_over_many_generations() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(
                seen.insert(generate_token()),
                "duplicate token generated within 10k draws"
            );
        }
    }
}
