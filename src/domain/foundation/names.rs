//! Validated names for criteria and alternatives.
//!
//! Names are the identifiers of the decision model: they key every registry
//! map and every section of the result, so they are checked once at the
//! boundary and carried as newtypes afterwards.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::ValidationError;

macro_rules! impl_name {
    ($name:ident, $field:expr) => {
        impl $name {
            /// Creates a name, rejecting empty or whitespace-only input.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(value))
            }

            /// Returns the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the name, returning the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> Self {
                name.0
            }
        }
    };
}

/// Name of a criterion, unique within a
/// [`CriteriaRegistry`](crate::domain::registry::CriteriaRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CriterionName(String);

impl_name!(CriterionName, "criterion name");

/// Name of an alternative, unique within an
/// [`OptionRegistry`](crate::domain::registry::OptionRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionName(String);

impl_name!(OptionName, "option name");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_name_accepts_non_empty_text() {
        let name = CriterionName::new("price US$").unwrap();
        assert_eq!(name.as_str(), "price US$");
        assert_eq!(format!("{}", name), "price US$");
    }

    #[test]
    fn criterion_name_rejects_empty_and_blank() {
        assert_eq!(
            CriterionName::new(""),
            Err(ValidationError::empty_field("criterion name"))
        );
        assert!(CriterionName::new("   ").is_err());
    }

    #[test]
    fn option_name_keeps_surrounding_whitespace() {
        let name = OptionName::new(" Phone A").unwrap();
        assert_eq!(name.as_str(), " Phone A");
    }

    #[test]
    fn option_name_rejects_blank() {
        assert_eq!(
            OptionName::try_from("\t"),
            Err(ValidationError::empty_field("option name"))
        );
    }

    #[test]
    fn names_borrow_as_str_for_map_lookups() {
        let mut map = std::collections::HashMap::new();
        map.insert(OptionName::new("Z").unwrap(), 1);
        assert_eq!(map.get("Z"), Some(&1));
    }

    #[test]
    fn name_deserialization_validates() {
        let ok: CriterionName = serde_json::from_str("\"speed\"").unwrap();
        assert_eq!(ok.as_str(), "speed");
        assert!(serde_json::from_str::<CriterionName>("\"\"").is_err());
    }
}
