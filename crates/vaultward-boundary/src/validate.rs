//! The boundary validator.
//!
//! Walks every `(action, subject)` pair the child rule set names and
//! checks each child rule for that pair against the parent's granting
//! and denying rules.

use crate::cover::is_rule_covered;
use crate::verdict::{BoundaryVerdict, MissingPermission};
use std::collections::HashSet;
use vaultward_rules::{Rule, RuleSet};

/// Decides whether `child` can ever grant more access than `parent`
/// holds.
///
/// Pure function over two immutable rule sets: no I/O, no retries, no
/// shared state, `O(child_rules × parent_rules × fields)`. A violation
/// is reported through the verdict's missing permissions, one entry per
/// uncovered `(action, subject, conditions)` combination.
///
/// # Example
///
/// ```
/// use vaultward_boundary::validate_boundary;
/// use vaultward_rules::{Rule, RuleSet};
///
/// let parent = RuleSet::new(vec![Rule::grant(["create"], "secrets")]).unwrap();
/// let child = RuleSet::new(vec![Rule::grant(["create", "edit"], "secrets")]).unwrap();
///
/// let verdict = validate_boundary(&parent, &child);
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.missing_permissions()[0].action, "edit");
/// ```
#[must_use]
pub fn validate_boundary(parent: &RuleSet, child: &RuleSet) -> BoundaryVerdict {
    let mut missing = Vec::new();
    let mut processed: HashSet<(&str, &str)> = HashSet::new();

    for rule in child.rules() {
        for action in &rule.actions {
            if !processed.insert((action.as_str(), rule.subject.as_str())) {
                continue;
            }

            let (granting, denying): (Vec<&Rule>, Vec<&Rule>) = parent
                .rules_for(action, &rule.subject)
                .into_iter()
                .partition(|parent_rule| !parent_rule.inverted);

            if granting.is_empty() {
                // The parent grants nothing at all for this pair; no
                // per-rule detail to report.
                missing.push(MissingPermission {
                    action: action.clone(),
                    subject: rule.subject.clone(),
                    conditions: None,
                });
                continue;
            }

            for child_rule in child.rules_for(action, &rule.subject) {
                if !is_rule_covered(&granting, &denying, child_rule) {
                    missing.push(MissingPermission {
                        action: action.clone(),
                        subject: rule.subject.clone(),
                        conditions: child_rule.conditions.clone(),
                    });
                }
            }
        }
    }

    BoundaryVerdict::new(missing)
}
