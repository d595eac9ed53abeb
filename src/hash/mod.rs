//! SHA-256 hex digests

use sha2::{Digest, Sha256};

/// Hash a string with SHA-256
///
/// Digests the UTF-8 encoding of the input and renders the result as
/// lowercase hexadecimal with no separators, exactly 64 characters for
/// any input. Deterministic and stateless.
///
/// # Example
///
/// ```rust
/// use extenders::sha256_hex;
///
/// let digest = sha256_hex("abc");
/// assert_eq!(
///     digest,
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_shape() {
        for input in ["", "a", "hello world", "日本語", &"x".repeat(10_000)] {
            let digest = sha256_hex(input);
            assert_eq!(digest.len(), 64);
            assert!(digest
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(sha256_hex("repeatable"), sha256_hex("repeatable"));
        assert_ne!(sha256_hex("one"), sha256_hex("two"));
    }
}
