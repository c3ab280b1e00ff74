//! Rule coverage.
//!
//! Decides whether one concrete child rule is fully covered by a
//! parent's granting rules for the same action/subject, without falling
//! inside any of the parent's explicit denials.

use crate::subset::is_operator_subset;
use vaultward_rules::Rule;

/// Returns `true` if `child` is covered by at least one granting parent
/// rule and stays clear of every denying one.
///
/// If no rule on the parent side carries conditions at all, the
/// parent's grant is unconditional and trivially covers anything.
///
/// # Example
///
/// ```
/// use vaultward_boundary::is_rule_covered;
/// use vaultward_rules::{ConditionOperator, Rule};
///
/// let granting = Rule::grant(["read"], "secrets")
///     .with_condition("environment", ConditionOperator::Eq("dev".into()));
/// let child = Rule::grant(["read"], "secrets")
///     .with_condition("environment", ConditionOperator::Eq("dev".into()));
/// assert!(is_rule_covered(&[&granting], &[], &child));
/// ```
#[must_use]
pub fn is_rule_covered(granting: &[&Rule], denying: &[&Rule], child: &Rule) -> bool {
    if granting
        .iter()
        .chain(denying)
        .all(|rule| rule.conditions.is_none())
    {
        return true;
    }

    let positive = granting.iter().any(|grant| scope_covers(grant, child));
    let negative = denying.iter().all(|denial| !scope_covers(denial, child));
    positive && negative
}

/// Per-field coverage test: every condition field on `parent` must be
/// constrained on `child` by an operator subset. A parent rule without
/// conditions covers everything; a child field the parent does not
/// constrain is ignored.
fn scope_covers(parent: &Rule, child: &Rule) -> bool {
    let Some(parent_conditions) = &parent.conditions else {
        return true;
    };
    parent_conditions.iter().all(|(field, parent_operator)| {
        child
            .conditions
            .as_ref()
            .and_then(|conditions| conditions.get(field))
            .is_some_and(|child_operator| is_operator_subset(parent_operator, child_operator))
    })
}
