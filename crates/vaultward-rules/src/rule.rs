//! The authorization rule type.
//!
//! A [`Rule`] is one grant or denial statement: a set of actions over a
//! subject, optionally narrowed by per-field [`ConditionOperator`]s.
//! `inverted = true` marks an explicit denial instead of a grant.

use crate::ConditionOperator;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-field constraints narrowing when a rule applies.
///
/// Maps a condition field name (e.g. `environment`, `secretPath`) to
/// exactly one operator. Fields not present are unconstrained. The map
/// representation itself enforces one-operator-per-field.
pub type RuleConditions = BTreeMap<String, ConditionOperator>;

/// One grant or denial statement over actions, a subject, and optional
/// field conditions.
///
/// # Wire Format
///
/// ```json
/// { "action": ["read", "edit"], "subject": "secrets",
///   "conditions": { "environment": { "$eq": "dev" } },
///   "inverted": true }
/// ```
///
/// `action` accepts a single string or an array; `conditions` and
/// `inverted` are optional.
///
/// # Example
///
/// ```
/// use vaultward_rules::{ConditionOperator, Rule};
///
/// let rule = Rule::grant(["read", "edit"], "secrets")
///     .with_condition("environment", ConditionOperator::Eq("dev".into()));
/// assert_eq!(rule.actions, vec!["read", "edit"]);
/// assert!(!rule.inverted);
///
/// let denial = Rule::deny(["read"], "secrets");
/// assert!(denial.inverted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Actions this rule applies to. Never empty in a validated rule set.
    #[serde(rename = "action", deserialize_with = "actions_from_wire")]
    pub actions: Vec<String>,

    /// The resource category this rule applies to (e.g. `secrets`).
    pub subject: String,

    /// Per-field constraints. `None` means the rule applies
    /// unconditionally to its subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<RuleConditions>,

    /// `true` marks an explicit denial rather than a grant.
    #[serde(default, skip_serializing_if = "is_false")]
    pub inverted: bool,
}

impl Rule {
    /// Builds a granting rule with no conditions.
    #[must_use]
    pub fn grant(
        actions: impl IntoIterator<Item = impl Into<String>>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            actions: actions.into_iter().map(Into::into).collect(),
            subject: subject.into(),
            conditions: None,
            inverted: false,
        }
    }

    /// Builds a denying (`inverted`) rule with no conditions.
    #[must_use]
    pub fn deny(
        actions: impl IntoIterator<Item = impl Into<String>>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            inverted: true,
            ..Self::grant(actions, subject)
        }
    }

    /// Adds one condition field, replacing any previous operator on it.
    #[must_use]
    pub fn with_condition(
        mut self,
        field: impl Into<String>,
        operator: ConditionOperator,
    ) -> Self {
        self.conditions
            .get_or_insert_with(RuleConditions::new)
            .insert(field.into(), operator);
        self
    }

    /// Returns `true` if this rule names the given action and subject.
    #[must_use]
    pub fn applies_to(&self, action: &str, subject: &str) -> bool {
        self.subject == subject && self.actions.iter().any(|a| a == action)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Accepts the wire form of `action`: a single string or an array.
fn actions_from_wire<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    struct ActionsVisitor;

    impl<'de> Visitor<'de> for ActionsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an action string or an array of action strings")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut actions = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(action) = seq.next_element()? {
                actions.push(action);
            }
            Ok(actions)
        }
    }

    deserializer.deserialize_any(ActionsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_accepts_single_string() {
        let rule: Rule =
            serde_json::from_str(r#"{"action": "read", "subject": "secrets"}"#)
                .expect("deserialize");
        assert_eq!(rule.actions, vec!["read"]);
        assert_eq!(rule.subject, "secrets");
        assert!(rule.conditions.is_none());
        assert!(!rule.inverted);
    }

    #[test]
    fn action_accepts_array() {
        let rule: Rule =
            serde_json::from_str(r#"{"action": ["create", "edit"], "subject": "secrets"}"#)
                .expect("deserialize");
        assert_eq!(rule.actions, vec!["create", "edit"]);
    }

    #[test]
    fn conditions_and_inverted_parse() {
        let rule: Rule = serde_json::from_str(
            r#"{
                "action": "read",
                "subject": "secrets",
                "inverted": true,
                "conditions": {
                    "environment": { "$eq": "dev" },
                    "secretPath": { "$glob": "/hello/**" }
                }
            }"#,
        )
        .expect("deserialize");

        assert!(rule.inverted);
        let conditions = rule.conditions.expect("conditions present");
        assert_eq!(
            conditions.get("environment"),
            Some(&ConditionOperator::Eq("dev".into()))
        );
        assert_eq!(
            conditions.get("secretPath"),
            Some(&ConditionOperator::Glob("/hello/**".into()))
        );
    }

    #[test]
    fn bare_string_condition_is_eq() {
        let rule: Rule = serde_json::from_str(
            r#"{"action": "read", "subject": "secrets", "conditions": {"environment": "dev"}}"#,
        )
        .expect("deserialize");
        let conditions = rule.conditions.expect("conditions present");
        assert_eq!(
            conditions.get("environment"),
            Some(&ConditionOperator::Eq("dev".into()))
        );
    }

    #[test]
    fn applies_to_matches_action_and_subject() {
        let rule = Rule::grant(["create", "edit"], "secrets");
        assert!(rule.applies_to("create", "secrets"));
        assert!(rule.applies_to("edit", "secrets"));
        assert!(!rule.applies_to("delete", "secrets"));
        assert!(!rule.applies_to("create", "members"));
    }

    #[test]
    fn with_condition_replaces_existing_operator() {
        let rule = Rule::grant(["read"], "secrets")
            .with_condition("environment", ConditionOperator::Eq("dev".into()))
            .with_condition("environment", ConditionOperator::Eq("prod".into()));
        let conditions = rule.conditions.expect("conditions present");
        assert_eq!(
            conditions.get("environment"),
            Some(&ConditionOperator::Eq("prod".into()))
        );
    }

    #[test]
    fn serialize_skips_absent_fields() {
        let rule = Rule::grant(["read"], "secrets");
        let json = serde_json::to_string(&rule).expect("serialize");
        assert_eq!(json, r#"{"action":["read"],"subject":"secrets"}"#);
    }

    #[test]
    fn serde_roundtrip() {
        let rule = Rule::deny(["read"], "secrets")
            .with_condition("secretPath", ConditionOperator::Glob("/hello/**".into()));
        let json = serde_json::to_string(&rule).expect("serialize");
        let parsed: Rule = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, rule);
    }
}
