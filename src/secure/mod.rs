//! In-memory secure strings
//!
//! [`SecureString`] keeps sensitive text XOR-masked against a per-instance
//! random key, so neither of its fields ever holds the plaintext. Both
//! fields are wiped when the value is dropped. Materializing the plaintext
//! goes through a temporary buffer that is zeroed on every exit path,
//! including the failure path.

use std::fmt;

use rand::RngCore;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::error::Result;

/// Sensitive text, masked in memory until explicitly materialized
///
/// # Example
///
/// ```rust
/// use extenders::SecureString;
///
/// let secret = SecureString::new("hunter2");
/// assert_eq!(secret.to_real_string().unwrap(), "hunter2");
/// assert_eq!(format!("{:?}", secret), "SecureString(****)");
/// ```
pub struct SecureString {
    masked: Vec<u8>,
    key: Vec<u8>,
}

impl SecureString {
    /// Wrap plaintext in a masked container
    ///
    /// The plaintext argument itself is the caller's to manage; from here
    /// on only the masked form is retained.
    pub fn new(plain: &str) -> Self {
        let bytes = plain.as_bytes();
        let mut key = vec![0u8; bytes.len()];
        rand::thread_rng().fill_bytes(&mut key);

        let masked = bytes
            .iter()
            .zip(key.iter())
            .map(|(byte, mask)| byte ^ mask)
            .collect();

        SecureString { masked, key }
    }

    /// Materialize the protected contents as plain text
    ///
    /// The unmasked bytes live in a zero-on-drop buffer for the duration
    /// of the call; whether the UTF-8 conversion succeeds or fails, that
    /// buffer is wiped before this function returns.
    ///
    /// # Errors
    ///
    /// Returns [`ExtenderError::Utf8`](crate::ExtenderError::Utf8) if the
    /// unmasked bytes are not valid UTF-8.
    pub fn to_real_string(&self) -> Result<String> {
        let mut buffer = Zeroizing::new(vec![0u8; self.masked.len()]);
        for (slot, (byte, mask)) in buffer
            .iter_mut()
            .zip(self.masked.iter().zip(self.key.iter()))
        {
            *slot = byte ^ mask;
        }

        tracing::trace!(len = buffer.len(), "materializing secure string");
        let text = std::str::from_utf8(&buffer)?.to_string();
        Ok(text)
    }

    /// Length of the protected contents in bytes
    pub fn len(&self) -> usize {
        self.masked.len()
    }

    /// Whether the protected contents are empty
    pub fn is_empty(&self) -> bool {
        self.masked.is_empty()
    }
}

impl From<&str> for SecureString {
    fn from(plain: &str) -> Self {
        SecureString::new(plain)
    }
}

/// Constant-time comparison of the protected contents
impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        if self.masked.len() != other.masked.len() {
            return false;
        }

        let mut lhs = Zeroizing::new(vec![0u8; self.masked.len()]);
        let mut rhs = Zeroizing::new(vec![0u8; other.masked.len()]);
        for (slot, (byte, mask)) in lhs.iter_mut().zip(self.masked.iter().zip(self.key.iter())) {
            *slot = byte ^ mask;
        }
        for (slot, (byte, mask)) in rhs.iter_mut().zip(other.masked.iter().zip(other.key.iter())) {
            *slot = byte ^ mask;
        }

        lhs.ct_eq(&rhs).into()
    }
}

impl Eq for SecureString {}

impl Drop for SecureString {
    fn drop(&mut self) {
        self.masked.zeroize();
        self.key.zeroize();
    }
}

// Never print the contents
impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureString(****)")
    }
}
