//! Rule-set validation errors.
//!
//! A rule set is plain data handed to the boundary checker, so the only
//! failure mode is malformed input: the evaluators themselves never error.
//! [`MalformedRule`] always names the offending rule index so the host can
//! point the caller at the exact rule to fix.

use thiserror::Error;

/// A rule violates a structural invariant of the rule model.
///
/// Produced by [`RuleSet::validate`](crate::RuleSet::validate) and the
/// validating constructors. The index is the rule's position in the
/// rule set as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRule {
    /// A rule's `action` list is empty.
    #[error("rule {index}: `action` must name at least one action")]
    EmptyActions {
        /// Position of the offending rule in the submitted rule set.
        index: usize,
    },

    /// A `$in` operator carries an empty value list.
    #[error("rule {index}: `$in` for condition field `{field}` must not be empty")]
    EmptyValueList {
        /// Position of the offending rule in the submitted rule set.
        index: usize,
        /// The condition field carrying the empty `$in`.
        field: String,
    },
}

impl MalformedRule {
    /// Position of the offending rule in the submitted rule set.
    #[must_use]
    pub fn rule_index(&self) -> usize {
        match self {
            Self::EmptyActions { index } | Self::EmptyValueList { index, .. } => *index,
        }
    }
}

/// Error parsing a rule set from its JSON wire form.
///
/// Wraps both syntactic failures (bad JSON, unsupported operator keys)
/// and structural ones ([`MalformedRule`]).
#[derive(Debug, Error)]
pub enum RuleParseError {
    /// The input is not valid JSON for the rule-array wire format.
    #[error("invalid rule set: {0}")]
    Json(#[from] serde_json::Error),

    /// The input parsed but violates a rule-model invariant.
    #[error(transparent)]
    Malformed(#[from] MalformedRule),
}
