//! Enum metadata and parsing
//!
//! [`DescribedEnum`] is an explicit, compile-time member table: each
//! implementor lists its members once and maps them to names, underlying
//! values, and optional human-readable descriptions. The free functions
//! here work against that table, so there is no runtime reflection
//! anywhere.
//!
//! Parsing is deliberately forgiving: [`to_enum`] never fails, it falls
//! back to the default member. Callers that need to distinguish a real
//! match from the fallback use [`parse_enum`], which returns the explicit
//! two-outcome [`ParsedEnum`].

/// Compile-time member table for a fieldless enum
///
/// Implementors list every member in `VARIANTS` and map each one to its
/// name and underlying value. `description()` defaults to the member name,
/// matching the behavior of an enum member with no description attached.
///
/// # Example
///
/// ```rust
/// use extenders::{describe, to_enum, DescribedEnum};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// enum Color {
///     #[default]
///     Red,
///     Green,
/// }
///
/// impl DescribedEnum for Color {
///     const VARIANTS: &'static [Self] = &[Color::Red, Color::Green];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Color::Red => "Red",
///             Color::Green => "Green",
///         }
///     }
///
///     fn discriminant(&self) -> i64 {
///         *self as i64
///     }
///
///     fn description(&self) -> &'static str {
///         match self {
///             Color::Red => "The color of fire",
///             Color::Green => "Green",
///         }
///     }
/// }
///
/// assert_eq!(describe(Color::Red), "The color of fire");
/// assert_eq!(to_enum::<Color>("green"), Color::Green);
/// assert_eq!(to_enum::<Color>("NotAColor"), Color::Red); // default member
/// ```
pub trait DescribedEnum: Copy + Default + PartialEq + Sized + 'static {
    /// Every member of the enum
    const VARIANTS: &'static [Self];

    /// The member's own name as text
    fn name(&self) -> &'static str;

    /// The member's underlying numeric value
    fn discriminant(&self) -> i64;

    /// The member's human-readable description, if one is attached
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Get the description of an enum member
///
/// Returns the attached description when one exists, otherwise the
/// member's own name (the trait default).
pub fn describe<T: DescribedEnum>(value: T) -> &'static str {
    value.description()
}

/// Outcome of a text-to-enum parse
///
/// Distinguishes a real match from the silent fallback so callers who care
/// can tell them apart; [`value`](ParsedEnum::value) collapses both back
/// into the plain member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedEnum<T> {
    /// The input named a member (by name or underlying value)
    Matched(T),
    /// The input named nothing; carries the default member
    Fallback(T),
}

impl<T> ParsedEnum<T> {
    /// Unwrap to the member, whichever way it was produced
    pub fn value(self) -> T {
        match self {
            ParsedEnum::Matched(value) | ParsedEnum::Fallback(value) => value,
        }
    }

    /// Whether the default member was substituted for unparseable input
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedEnum::Fallback(_))
    }
}

/// Parse text as an enum member, reporting fallbacks explicitly
///
/// The trimmed input is matched against member names first
/// (case-insensitively when `ignore_case` is set), then against underlying
/// numeric values. Input matching neither produces
/// `ParsedEnum::Fallback(T::default())`.
///
/// # Arguments
///
/// * `text` - The text to parse; surrounding whitespace is ignored
/// * `ignore_case` - Whether name matching ignores ASCII case
pub fn parse_enum<T: DescribedEnum>(text: &str, ignore_case: bool) -> ParsedEnum<T> {
    let trimmed = text.trim();

    for &member in T::VARIANTS {
        let matched = if ignore_case {
            member.name().eq_ignore_ascii_case(trimmed)
        } else {
            member.name() == trimmed
        };
        if matched {
            return ParsedEnum::Matched(member);
        }
    }

    if let Ok(value) = trimmed.parse::<i64>() {
        for &member in T::VARIANTS {
            if member.discriminant() == value {
                return ParsedEnum::Matched(member);
            }
        }
    }

    tracing::debug!(input = trimmed, "no matching enum member, using default");
    ParsedEnum::Fallback(T::default())
}

/// Directly cast a string into an enum member
///
/// Case-insensitive, and never fails: input naming no member yields the
/// default member. Use [`parse_enum`] to detect the fallback.
pub fn to_enum<T: DescribedEnum>(text: &str) -> T {
    parse_enum(text, true).value()
}
