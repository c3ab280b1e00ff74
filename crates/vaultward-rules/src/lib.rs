//! Authorization rule model for Vaultward.
//!
//! This crate is the pure-data layer of the permission-boundary checker:
//! the rule and operator types, their JSON wire format, structural
//! validation, and rule lookup. It contains no containment logic — that
//! lives in `vaultward-boundary`.
//!
//! # Crate Architecture
//!
//! ```text
//! vaultward-rules     : Rule, ConditionOperator, RuleSet  ◄── THIS CRATE
//!        ↑
//! vaultward-boundary  : operator/rule subset evaluators, boundary validator
//!        ↑
//! vaultward-cli       : command-line frontend
//! ```
//!
//! # Rule Model
//!
//! | Type | Role |
//! |------|------|
//! | [`ConditionOperator`] | One comparison over one field's value domain |
//! | [`RuleConditions`] | Field name → operator map |
//! | [`Rule`] | One grant or denial over actions, a subject, and conditions |
//! | [`RuleSet`] | An identity's ordered rule collection ("ability") |
//!
//! Rule sets are constructed once from persisted role/policy data and
//! passed immutably into the boundary checker. The only failure mode is
//! malformed input, reported as [`MalformedRule`] with the offending
//! rule's index.

pub mod error;
pub mod operator;
pub mod rule;
pub mod ruleset;

pub use error::{MalformedRule, RuleParseError};
pub use operator::ConditionOperator;
pub use rule::{Rule, RuleConditions};
pub use ruleset::RuleSet;
