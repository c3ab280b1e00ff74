//! Ordered rule collections ("abilities") and rule lookup.

use crate::{MalformedRule, Rule, RuleParseError};
use serde::{Deserialize, Serialize};

/// An ordered collection of rules: everything one identity, role, or
/// token is permitted (or forbidden) to do.
///
/// Order is preserved for fidelity with the submitted policy, but the
/// boundary checker treats matching rules as an unordered set —
/// first/last-match-wins resolution belongs to the request-time
/// evaluator, which is outside this crate.
///
/// A `RuleSet` is constructed once and read-only thereafter; it is
/// `Send + Sync` plain data, safe to share across concurrent boundary
/// checks.
///
/// # Example
///
/// ```
/// use vaultward_rules::RuleSet;
///
/// let set = RuleSet::from_json(
///     r#"[{ "action": ["create", "edit"], "subject": "secrets" }]"#,
/// )
/// .expect("valid rule set");
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.rules_for("edit", "secrets").len(), 1);
/// assert!(set.rules_for("delete", "secrets").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a validated rule set.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRule`] naming the first rule that violates a
    /// structural invariant (empty `action` list, empty `$in` list).
    pub fn new(rules: Vec<Rule>) -> Result<Self, MalformedRule> {
        let set = Self { rules };
        set.validate()?;
        Ok(set)
    }

    /// Parses and validates the JSON rule-array wire format.
    ///
    /// # Errors
    ///
    /// Returns [`RuleParseError`] on invalid JSON, an unsupported
    /// operator key, or a structural invariant violation.
    pub fn from_json(input: &str) -> Result<Self, RuleParseError> {
        let set: Self = serde_json::from_str(input)?;
        set.validate()?;
        Ok(set)
    }

    /// Checks the structural invariants of every rule.
    ///
    /// Hosts that deserialize a `RuleSet` directly through serde must
    /// call this before handing the set to the boundary checker.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRule`] for the first offending rule.
    pub fn validate(&self) -> Result<(), MalformedRule> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.actions.is_empty() {
                return Err(MalformedRule::EmptyActions { index });
            }
            if let Some(conditions) = &rule.conditions {
                for (field, operator) in conditions {
                    if let crate::ConditionOperator::OneOf(values) = operator {
                        if values.is_empty() {
                            return Err(MalformedRule::EmptyValueList {
                                index,
                                field: field.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// All rules in submission order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set contains no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule (granting or denying) that names the given action and
    /// subject. No ordering guarantee.
    #[must_use]
    pub fn rules_for(&self, action: &str, subject: &str) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(action, subject))
            .collect()
    }
}

impl From<RuleSet> for Vec<Rule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConditionOperator;

    #[test]
    fn from_json_parses_rule_array() {
        let set = RuleSet::from_json(
            r#"[
                { "action": ["create", "edit"], "subject": "secrets" },
                { "action": "read", "subject": "members",
                  "conditions": { "environment": "dev" } }
            ]"#,
        )
        .expect("valid rule set");

        assert_eq!(set.len(), 2);
        assert_eq!(set.rules()[1].actions, vec!["read"]);
        assert_eq!(
            set.rules()[1]
                .conditions
                .as_ref()
                .and_then(|c| c.get("environment")),
            Some(&ConditionOperator::Eq("dev".into()))
        );
    }

    #[test]
    fn empty_array_is_a_valid_empty_set() {
        let set = RuleSet::from_json("[]").expect("valid");
        assert!(set.is_empty());
    }

    #[test]
    fn rules_for_matches_action_and_subject() {
        let set = RuleSet::new(vec![
            Rule::grant(["create"], "secrets"),
            Rule::grant(["create", "edit"], "members"),
            Rule::deny(["create"], "secrets"),
        ])
        .expect("valid");

        assert_eq!(set.rules_for("create", "secrets").len(), 2);
        assert_eq!(set.rules_for("edit", "members").len(), 1);
        assert!(set.rules_for("edit", "secrets").is_empty());
        assert!(set.rules_for("create", "projects").is_empty());
    }

    #[test]
    fn rules_for_includes_denying_rules() {
        let set = RuleSet::new(vec![
            Rule::grant(["read"], "secrets"),
            Rule::deny(["read"], "secrets"),
        ])
        .expect("valid");

        let matched = set.rules_for("read", "secrets");
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().any(|r| r.inverted));
        assert!(matched.iter().any(|r| !r.inverted));
    }

    #[test]
    fn empty_actions_rejected_with_index() {
        let err = RuleSet::new(vec![
            Rule::grant(["read"], "secrets"),
            Rule::grant(Vec::<String>::new(), "secrets"),
        ])
        .expect_err("empty action list");
        assert_eq!(err, MalformedRule::EmptyActions { index: 1 });
    }

    #[test]
    fn empty_in_list_rejected_with_field() {
        let err = RuleSet::from_json(
            r#"[{ "action": "read", "subject": "secrets",
                  "conditions": { "environment": { "$in": [] } } }]"#,
        )
        .expect_err("empty $in list");
        assert!(matches!(
            err,
            RuleParseError::Malformed(MalformedRule::EmptyValueList { index: 0, ref field })
                if field == "environment"
        ));
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let err = RuleSet::from_json("not json").expect_err("invalid json");
        assert!(matches!(err, RuleParseError::Json(_)));
    }

    #[test]
    fn serde_roundtrip_preserves_order() {
        let set = RuleSet::new(vec![
            Rule::grant(["create"], "secrets"),
            Rule::deny(["read"], "secrets")
                .with_condition("secretPath", ConditionOperator::Glob("/hello/**".into())),
        ])
        .expect("valid");

        let json = serde_json::to_string(&set).expect("serialize");
        let parsed = RuleSet::from_json(&json).expect("deserialize");
        assert_eq!(parsed, set);
    }
}
