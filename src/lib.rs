//! Extenders
//!
//! A collection of stateless helper functions attached to everyday inputs:
//! strings, serializable values, enums, and sensitive text. Everything here
//! is a pure (or nearly pure) transformation with no shared runtime and no
//! state beyond a read-only table of compiled character-class patterns.
//!
//! # Features
//!
//! - **Validation**: canonical-round-trip email checking and http/https URL checking
//! - **Enum metadata**: description lookup and forgiving text-to-enum parsing
//! - **Serialization**: JSON and XML round-trips over serde
//! - **Secure strings**: masked in-memory text with zero-on-drop materialization
//! - **Hashing**: SHA-256 lowercase hex digests
//! - **Text filters**: remove/detect pairs over fixed character classes
//!
//! # Quick Start
//!
//! ```rust
//! use extenders::{is_valid_email, remove_non_numerics, sha256_hex};
//!
//! assert!(is_valid_email("user@example.com"));
//! assert_eq!(remove_non_numerics("a1b2c3"), "123");
//! assert_eq!(sha256_hex("abc").len(), 64);
//! ```
//!
//! # Error policy
//!
//! Failure behavior is per-operation and deliberately not unified: the
//! validators fail to boolean `false`, enum parsing falls back to the
//! default member, and the serializers and secure-string unmarshal fail
//! loudly with [`ExtenderError`]. See each module for the specifics.

/// Crate version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod collection;
pub mod enums;
pub mod error;
pub mod hash;
pub mod secure;
pub mod serialize;
pub mod text;
pub mod validate;

// Re-exports for convenience
pub use collection::{remove_bound_item, BoundCollection};
pub use enums::{describe, parse_enum, to_enum, DescribedEnum, ParsedEnum};
pub use error::{ExtenderError, Result};
pub use hash::sha256_hex;
pub use secure::SecureString;
pub use serialize::{to_instance, to_json, to_xml, SerializationType};
pub use text::{
    has_non_alpha_numerics, has_non_numerics, has_numerics, has_white_space,
    remove_non_alpha_numerics, remove_non_numerics, remove_numerics, remove_white_space,
};
pub use validate::{is_valid_email, is_valid_url, MailAddress};
