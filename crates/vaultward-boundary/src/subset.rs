//! Operator containment.
//!
//! [`is_operator_subset`] decides, for a single condition field, whether
//! every value accepted by the child's operator is also accepted by the
//! parent's. This is the innermost test of the boundary check; the
//! per-case rules are pinned by the rule-set fixtures in
//! `tests/boundary_matrix.rs`.
//!
//! Two cases are deliberately conservative:
//!
//! - A child `NotEq` accepts every string but one, so only a parent
//!   `NotEq` excluding the identical value covers it.
//! - A child wildcard pattern is treated as strictly broader than any
//!   fixed value set: it can never be covered by a parent `Eq` or
//!   `OneOf`.

use crate::matcher::{glob_matches, has_glob_syntax};
use vaultward_rules::ConditionOperator;

/// Returns `true` if every value accepted by `child` is also accepted
/// by `parent`.
///
/// Pattern-vs-pattern containment is syntactic: the child's pattern
/// *string* is matched against the parent's pattern as if it were a
/// literal value. This under- and over-approximates true language
/// containment for adversarially crafted patterns; it is the accepted
/// behavior, not a bug to fix.
///
/// # Example
///
/// ```
/// use vaultward_boundary::is_operator_subset;
/// use vaultward_rules::ConditionOperator;
///
/// let parent = ConditionOperator::one_of(["dev", "staging"]);
/// assert!(is_operator_subset(&parent, &ConditionOperator::Eq("dev".into())));
/// assert!(!is_operator_subset(&parent, &ConditionOperator::Eq("prod".into())));
/// ```
#[must_use]
pub fn is_operator_subset(parent: &ConditionOperator, child: &ConditionOperator) -> bool {
    use ConditionOperator::{Eq, Glob, NotEq, OneOf};

    match child {
        Eq(value) => accepts_literal(parent, value),
        OneOf(values) => values.iter().all(|value| accepts_literal(parent, value)),
        Glob(pattern) if has_glob_syntax(pattern) => match parent {
            // Syntactic containment: the child pattern as a literal
            // against the parent pattern.
            Glob(parent_pattern) => glob_matches(pattern, parent_pattern),
            NotEq(excluded) => !glob_matches(excluded, pattern),
            Eq(_) | OneOf(_) => false,
        },
        // A $glob with no wildcard syntax is a plain literal.
        Glob(literal) => accepts_literal(parent, literal),
        NotEq(value) => matches!(parent, NotEq(excluded) if excluded == value),
    }
}

/// Returns `true` if `parent` accepts the single literal `value`.
fn accepts_literal(parent: &ConditionOperator, value: &str) -> bool {
    match parent {
        ConditionOperator::Eq(expected) => value == expected,
        ConditionOperator::NotEq(excluded) => value != excluded,
        ConditionOperator::OneOf(values) => values.iter().any(|v| v == value),
        ConditionOperator::Glob(pattern) => glob_matches(value, pattern),
    }
}
