//! Port type tags and the variant type-set compatibility layer
//!
//! Every port declares either a single concrete type, a set of types it
//! accepts (e.g. `INT,FLOAT`), or the wildcard `*`. The host editor asks
//! this module whether a producer port may be wired into a consumer port.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Token that matches any port type
pub const WILDCARD: &str = "*";

/// Check if a raw type token denotes "matches anything"
pub fn is_wildcard(token: &str) -> bool {
    token == WILDCARD
}

/// Concrete data types that can flow through ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point number
    Float,
    /// Text string
    String,
    /// Boolean value
    Boolean,
}

impl DataType {
    /// Get the canonical tag for this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Int => "INT",
            DataType::Float => "FLOAT",
            DataType::String => "STRING",
            DataType::Boolean => "BOOLEAN",
        }
    }

    /// Parse a canonical tag back into a data type
    pub fn from_token(token: &str) -> Option<DataType> {
        match token {
            "INT" => Some(DataType::Int),
            "FLOAT" => Some(DataType::Float),
            "STRING" => Some(DataType::String),
            "BOOLEAN" => Some(DataType::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of type tags a port accepts or produces
///
/// Built once at node-definition time and immutable afterwards. Unknown
/// tokens are kept as opaque labels: they never match a concrete tag, so
/// malformed declarations degrade to "not connectable" rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSet {
    /// Wildcard, compatible with everything
    Any,
    /// A set of accepted type tags
    Tags(BTreeSet<String>),
}

impl TypeSet {
    /// The wildcard type set
    pub fn any() -> Self {
        TypeSet::Any
    }

    /// A type set accepting exactly one concrete type
    pub fn single(data_type: DataType) -> Self {
        TypeSet::Tags(BTreeSet::from([data_type.name().to_string()]))
    }

    /// A type set accepting any of the given concrete types
    pub fn of(data_types: &[DataType]) -> Self {
        TypeSet::Tags(data_types.iter().map(|t| t.name().to_string()).collect())
    }

    /// The `INT,FLOAT` union used by numeric ports
    pub fn number() -> Self {
        TypeSet::of(&[DataType::Int, DataType::Float])
    }

    /// Parse a comma-separated tag list, `*` meaning wildcard
    ///
    /// Tokens are not trimmed or validated; whatever results from splitting
    /// on commas participates in the subset comparison as-is.
    pub fn parse(s: &str) -> Self {
        if is_wildcard(s) {
            TypeSet::Any
        } else {
            TypeSet::Tags(s.split(',').map(str::to_string).collect())
        }
    }

    /// Check if this is the wildcard type set
    pub fn is_wildcard(&self) -> bool {
        matches!(self, TypeSet::Any)
    }

    /// Check if this set is variant-aware: the wildcard, or a union of
    /// more than one tag
    pub fn is_variant(&self) -> bool {
        match self {
            TypeSet::Any => true,
            TypeSet::Tags(tags) => tags.len() > 1,
        }
    }

    /// Check if this set accepts the given concrete type
    pub fn accepts(&self, data_type: DataType) -> bool {
        match self {
            TypeSet::Any => true,
            TypeSet::Tags(tags) => tags.contains(data_type.name()),
        }
    }

    /// Check if a producer port declared with this set may feed a consumer
    /// port declared with `consumer`
    ///
    /// The wildcard short-circuits in either position; otherwise the
    /// connection is valid iff every tag this port can produce is accepted
    /// by the consumer. The relation is not symmetric: `{INT}` feeds
    /// `{INT,FLOAT}` but not the other way around.
    pub fn can_connect_to(&self, consumer: &TypeSet) -> bool {
        match (self, consumer) {
            (TypeSet::Any, _) | (_, TypeSet::Any) => true,
            (TypeSet::Tags(produced), TypeSet::Tags(accepted)) => {
                produced.is_subset(accepted)
            }
        }
    }
}

impl From<DataType> for TypeSet {
    fn from(data_type: DataType) -> Self {
        TypeSet::single(data_type)
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSet::Any => f.write_str(WILDCARD),
            TypeSet::Tags(tags) => {
                let joined: Vec<&str> = tags.iter().map(String::as_str).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

impl FromStr for TypeSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TypeSet::parse(s))
    }
}

// Type sets travel to hosts in their comma-joined string form
impl Serialize for TypeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TypeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TypeSet::parse(&s))
    }
}

/// A supplied input's declared type does not satisfy the port's declared type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type of {key}: {found} (expected {expected})")]
pub struct TypeMismatch {
    /// The offending input name
    pub key: String,
    /// The type actually declared for the supplied input
    pub found: TypeSet,
    /// The type the port expects
    pub expected: TypeSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_compatibility_is_asymmetric() {
        let int = TypeSet::single(DataType::Int);
        let number = TypeSet::number();
        assert!(int.can_connect_to(&number));
        assert!(!number.can_connect_to(&int));
    }

    #[test]
    fn test_equal_sets_are_mutually_compatible() {
        let a = TypeSet::single(DataType::Int);
        let b = TypeSet::parse("INT");
        assert!(a.can_connect_to(&b));
        assert!(b.can_connect_to(&a));

        let n1 = TypeSet::number();
        let n2 = TypeSet::parse("FLOAT,INT");
        assert!(n1.can_connect_to(&n2));
        assert!(n2.can_connect_to(&n1));
    }

    #[test]
    fn test_wildcard_absorbs_everything() {
        let any = TypeSet::any();
        assert!(any.can_connect_to(&TypeSet::single(DataType::String)));
        assert!(TypeSet::single(DataType::Boolean).can_connect_to(&any));
        assert!(any.can_connect_to(&any));
        assert!(TypeSet::parse("*").is_wildcard());
        assert!(is_wildcard("*"));
        assert!(!is_wildcard("INT"));
    }

    #[test]
    fn test_disjoint_sets_do_not_connect() {
        let string = TypeSet::single(DataType::String);
        let boolean = TypeSet::single(DataType::Boolean);
        assert!(!string.can_connect_to(&boolean));
        assert!(!boolean.can_connect_to(&string));
    }

    #[test]
    fn test_malformed_tokens_degrade_to_incompatible() {
        // Unrecognized and untrimmed tokens are opaque labels, not errors
        let garbage = TypeSet::parse("NOT A TYPE");
        assert!(!garbage.can_connect_to(&TypeSet::number()));
        assert!(garbage.can_connect_to(&TypeSet::any()));

        let spaced = TypeSet::parse("INT, FLOAT");
        assert!(!spaced.can_connect_to(&TypeSet::number()));
        // The INT token alone still matches
        assert!(TypeSet::single(DataType::Int).can_connect_to(&spaced));
    }

    #[test]
    fn test_variant_detection() {
        assert!(TypeSet::any().is_variant());
        assert!(TypeSet::number().is_variant());
        assert!(!TypeSet::single(DataType::Float).is_variant());
    }

    #[test]
    fn test_accepts_concrete_type() {
        let number = TypeSet::number();
        assert!(number.accepts(DataType::Int));
        assert!(number.accepts(DataType::Float));
        assert!(!number.accepts(DataType::String));
        assert!(TypeSet::any().accepts(DataType::String));
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(TypeSet::any().to_string(), "*");
        assert_eq!(TypeSet::number().to_string(), "FLOAT,INT");
        let parsed: TypeSet = "FLOAT,INT".parse().unwrap();
        assert_eq!(parsed, TypeSet::number());
    }

    #[test]
    fn test_serde_string_form() {
        let json = serde_json::to_string(&TypeSet::number()).unwrap();
        assert_eq!(json, "\"FLOAT,INT\"");
        let back: TypeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TypeSet::number());
    }

    #[test]
    fn test_mismatch_message() {
        let err = TypeMismatch {
            key: "value".to_string(),
            found: TypeSet::single(DataType::String),
            expected: TypeSet::single(DataType::Int),
        };
        assert_eq!(err.to_string(), "invalid type of value: STRING (expected INT)");
    }
}
