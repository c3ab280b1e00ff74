//! Condition operators.
//!
//! A [`ConditionOperator`] is one comparison applied to one condition
//! field's value domain. The closed enum replaces the "object with
//! optional keys" shape used on the wire, so per-operator logic is
//! exhaustively checked by the compiler instead of silently falling
//! through on an unhandled key.
//!
//! # Wire Format
//!
//! | JSON | Operator |
//! |------|----------|
//! | `"dev"` | [`Eq("dev")`](ConditionOperator::Eq) |
//! | `{"$eq": "dev"}` | [`Eq`](ConditionOperator::Eq) |
//! | `{"$ne": "/hello"}` | [`NotEq`](ConditionOperator::NotEq) |
//! | `{"$in": ["dev", "staging"]}` | [`OneOf`](ConditionOperator::OneOf) |
//! | `{"$glob": "/hello/**"}` | [`Glob`](ConditionOperator::Glob) |
//!
//! A bare string literal is shorthand for `$eq`. Serialization always
//! emits the explicit operator-object form.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One comparison over a condition field's value domain.
///
/// # Example
///
/// ```
/// use vaultward_rules::ConditionOperator;
///
/// let op: ConditionOperator = serde_json::from_str(r#"{"$in": ["dev", "staging"]}"#)
///     .expect("valid operator");
/// assert_eq!(op, ConditionOperator::one_of(["dev", "staging"]));
///
/// // A bare string is shorthand for $eq
/// let op: ConditionOperator = serde_json::from_str(r#""dev""#).expect("valid operator");
/// assert_eq!(op, ConditionOperator::Eq("dev".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionOperator {
    /// Matches exactly the given value (`$eq`).
    Eq(String),
    /// Matches every string except the given value (`$ne`).
    NotEq(String),
    /// Matches any member of the value list (`$in`).
    OneOf(Vec<String>),
    /// Matches any string accepted by the glob pattern (`$glob`).
    Glob(String),
}

/// Operator keys accepted on the wire.
const OPERATOR_KEYS: &[&str] = &["$eq", "$ne", "$in", "$glob"];

impl ConditionOperator {
    /// Builds an [`OneOf`](Self::OneOf) from anything iterable.
    #[must_use]
    pub fn one_of(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// The wire key for this operator (`$eq`, `$ne`, `$in`, `$glob`).
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Eq(_) => "$eq",
            Self::NotEq(_) => "$ne",
            Self::OneOf(_) => "$in",
            Self::Glob(_) => "$glob",
        }
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq(v) | Self::NotEq(v) | Self::Glob(v) => {
                write!(f, "{} \"{v}\"", self.key())
            }
            Self::OneOf(values) => {
                write!(f, "{} [", self.key())?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{v}\"")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Serialize for ConditionOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Eq(v) => map.serialize_entry("$eq", v)?,
            Self::NotEq(v) => map.serialize_entry("$ne", v)?,
            Self::OneOf(values) => map.serialize_entry("$in", values)?,
            Self::Glob(pattern) => map.serialize_entry("$glob", pattern)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConditionOperator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OperatorVisitor)
    }
}

struct OperatorVisitor;

impl<'de> Visitor<'de> for OperatorVisitor {
    type Value = ConditionOperator;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string literal or an object with exactly one operator key")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ConditionOperator::Eq(value.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let Some(key) = map.next_key::<String>()? else {
            return Err(de::Error::custom(
                "condition must carry exactly one operator, found none",
            ));
        };
        let operator = match key.as_str() {
            "$eq" => ConditionOperator::Eq(map.next_value()?),
            "$ne" => ConditionOperator::NotEq(map.next_value()?),
            "$in" => ConditionOperator::OneOf(map.next_value()?),
            "$glob" => ConditionOperator::Glob(map.next_value()?),
            other => return Err(de::Error::unknown_field(other, OPERATOR_KEYS)),
        };
        if map.next_key::<String>()?.is_some() {
            return Err(de::Error::custom(
                "condition must carry exactly one operator, found several",
            ));
        }
        Ok(operator)
    }
}
