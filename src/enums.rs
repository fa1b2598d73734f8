//! Closed enumerations backed by an open external vocabulary of wire codes.
//!
//! The API keeps adding card brands and error codes. Parsing never fails:
//! a code the SDK does not know maps to the enumeration's fallback variant.
//! The original string is not kept; callers needing it must capture it first.

use serde::{Deserialize, Deserializer, Serializer};

/// A fieldless enumeration whose variants each carry a canonical wire code.
pub trait WithCode: Copy + Eq + 'static {
    /// Every variant, in declaration order.
    const VALUES: &'static [Self];

    /// Canonical wire code of this variant.
    fn code(&self) -> &'static str;
}

/// Return the first variant in `values` whose code equals `code` exactly, or `fallback`.
///
/// Comparison is case-sensitive.
pub fn parse<E: WithCode>(code: &str, fallback: E, values: &[E]) -> E {
    match values.iter().find(|value| value.code() == code) {
        Some(value) => *value,
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                code,
                fallback = fallback.code(),
                "unrecognized wire code, using fallback"
            );
            fallback
        }
    }
}

pub(crate) fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: WithCode,
    S: Serializer,
{
    serializer.serialize_str(value.code())
}

pub(crate) fn deserialize<'de, E, D>(deserializer: D, fallback: E) -> Result<E, D::Error>
where
    E: WithCode,
    D: Deserializer<'de>,
{
    match Option::<std::borrow::Cow<'de, str>>::deserialize(deserializer)? {
        Some(code) => Ok(parse(&code, fallback, E::VALUES)),
        None => Ok(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Green,
        Other,
    }

    impl WithCode for Color {
        const VALUES: &'static [Self] = &[Self::Red, Self::Green, Self::Other];

        fn code(&self) -> &'static str {
            match self {
                Self::Red => "red",
                Self::Green => "green",
                Self::Other => "other",
            }
        }
    }

    #[test]
    fn parse_returns_exact_match() {
        assert_eq!(parse("green", Color::Other, Color::VALUES), Color::Green);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(parse("Green", Color::Other, Color::VALUES), Color::Other);
    }

    #[test]
    fn parse_only_scans_given_values() {
        assert_eq!(parse("red", Color::Other, &[Color::Green]), Color::Other);
    }
}
