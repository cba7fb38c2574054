//! Deterministic avatar URL derivation.
//!
//! An account's avatar is the Gravatar image addressed by the SHA-256
//! digest of its normalized email. Deriving from the normalized form keeps
//! the URL stable across capitalization and whitespace differences in what
//! the user typed at registration.

use sha2::{Digest, Sha256};

/// Derive the avatar URL for a normalized email address.
///
/// Callers are expected to pass the output of
/// [`normalize_email`](crate::normalize_email); the digest is taken over
/// the input as-is.
#[must_use]
pub fn avatar_url(normalized_email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized_email.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("https://www.gravatar.com/avatar/{}?d=identicon", digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize_email;

    #[test]
    fn test_avatar_url_deterministic() {
        assert_eq!(
            avatar_url("foo@example.com"),
            avatar_url("foo@example.com")
        );
    }

    #[test]
    fn test_avatar_url_normalization_insensitive() {
        let a = avatar_url(&normalize_email("  Foo@Example.COM "));
        let b = avatar_url(&normalize_email("foo@example.com"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_avatar_url_distinct_emails() {
        assert_ne!(avatar_url("foo@example.com"), avatar_url("bar@example.com"));
    }

    #[test]
    fn test_avatar_url_shape() {
        let url = avatar_url("foo@example.com");
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?d=identicon"));
        // SHA-256 digest is 64 hex characters
        let digest = url
            .trim_start_matches("https://www.gravatar.com/avatar/")
            .trim_end_matches("?d=identicon");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
