//! JSON/XML serialization round-trips
//!
//! Thin seams over serde_json and quick-xml with one shared contract: for
//! any value whose type fits the XML-supported shape and has value
//! equality, `to_instance(to_xml(x), Xml) == x` and
//! `to_instance(to_json(x), Json) == x`.
//!
//! Unlike the rest of the crate, these operations fail loudly: malformed
//! input and unsupported type shapes propagate the serializer's error to
//! the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Which wire format [`to_instance`] should expect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationType {
    /// Member-name-keyed JSON object serialization
    Json,
    /// Element-per-member XML rooted at the type name
    Xml,
}

/// Serialize a value into JSON text
///
/// Public members are keyed by their declared names.
///
/// # Errors
///
/// Propagates the serializer's failure for values JSON cannot represent
/// (e.g. non-string map keys).
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use extenders::to_json;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let json = to_json(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(json, r#"{"x":1,"y":2}"#);
/// ```
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize a value into XML text
///
/// The document is rooted at the type name with one element per member.
///
/// # Errors
///
/// Propagates the serializer's failure for type shapes XML cannot
/// represent (e.g. a bare sequence at the top level).
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use extenders::to_xml;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let xml = to_xml(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(xml, "<Point><x>1</x><y>2</y></Point>");
/// ```
pub fn to_xml<T: Serialize>(value: &T) -> Result<String> {
    Ok(quick_xml::se::to_string(value)?)
}

/// Deserialize JSON or XML text back into a value
///
/// Members are matched by declared name against the requested type.
///
/// # Arguments
///
/// * `text` - The serialized data
/// * `format` - Which format the data is in
///
/// # Errors
///
/// Propagates the deserializer's failure for malformed input or input
/// that does not match the requested type.
pub fn to_instance<T: DeserializeOwned>(text: &str, format: SerializationType) -> Result<T> {
    match format {
        SerializationType::Json => Ok(serde_json::from_str(text)?),
        SerializationType::Xml => Ok(quick_xml::de::from_str(text)?),
    }
}
