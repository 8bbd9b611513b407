// ---------------------------------------------------------------------------
// UnknownVariant: returned when a name does not match any known enum value
// ---------------------------------------------------------------------------

use std::fmt;

/// A name that did not match any variant of the enum it was parsed as.
///
/// Assembly never fails on these: callers that go through
/// `from_name_or_fallback` get the documented fallback and a warning instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownVariant {
    HairStyle(String),
    Expression(String),
    Orientation(String),
    Archetype(String),
}

impl UnknownVariant {
    pub fn name(&self) -> &str {
        match self {
            UnknownVariant::HairStyle(name)
            | UnknownVariant::Expression(name)
            | UnknownVariant::Orientation(name)
            | UnknownVariant::Archetype(name) => name,
        }
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownVariant::HairStyle(name) => write!(f, "Unknown hair style: {name:?}"),
            UnknownVariant::Expression(name) => write!(f, "Unknown expression: {name:?}"),
            UnknownVariant::Orientation(name) => write!(f, "Unknown orientation: {name:?}"),
            UnknownVariant::Archetype(name) => write!(f, "Unknown archetype: {name:?}"),
        }
    }
}

impl std::error::Error for UnknownVariant {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_kind_and_value() {
        let err = UnknownVariant::HairStyle("mohawk".to_string());
        assert_eq!(err.to_string(), "Unknown hair style: \"mohawk\"");
        assert_eq!(err.name(), "mohawk");
    }
}
