//! Permission-boundary containment checker for Vaultward.
//!
//! Given a delegator's rule set (the **parent**) and a candidate rule
//! set being assigned to a subordinate identity, role, or scoped token
//! (the **child**), [`validate_boundary`] decides whether the child can
//! ever be granted more access than the parent actually holds. This is
//! the mechanism that prevents privilege escalation when roles are
//! duplicated, tokens are scoped, or sub-identities are created.
//!
//! # Control Flow
//!
//! ```text
//! validate_boundary (every (action, subject) pair named by the child)
//!     │
//!     ├── RuleSet::rules_for          (vaultward-rules, on both sides)
//!     │
//!     └── is_rule_covered             (positive coverage ∧ negative clearance)
//!             │
//!             └── is_operator_subset  (per condition field)
//!                     │
//!                     └── glob matcher (globset, black-box predicate)
//! ```
//!
//! # What This Crate Does Not Do
//!
//! It reasons about *rule sets*, never live requests: no evaluation of
//! whether a specific subject/action pair is currently permitted, no
//! role-inheritance resolution, no authentication. Inputs are plain
//! data; every code path returns a verdict rather than erroring.
//!
//! # Example
//!
//! ```
//! use vaultward_boundary::validate_boundary;
//! use vaultward_rules::{ConditionOperator, Rule, RuleSet};
//!
//! let parent = RuleSet::new(vec![Rule::grant(["read", "edit"], "secrets")
//!     .with_condition("environment", ConditionOperator::one_of(["dev", "staging"]))])
//!     .unwrap();
//!
//! // Narrower than the parent: fine.
//! let child = RuleSet::new(vec![Rule::grant(["read"], "secrets")
//!     .with_condition("environment", ConditionOperator::Eq("dev".into()))])
//!     .unwrap();
//! assert!(validate_boundary(&parent, &child).is_valid());
//!
//! // Reaches outside the parent's environments: rejected.
//! let child = RuleSet::new(vec![Rule::grant(["read"], "secrets")
//!     .with_condition("environment", ConditionOperator::Eq("prod".into()))])
//!     .unwrap();
//! assert!(!validate_boundary(&parent, &child).is_valid());
//! ```

pub mod cover;
mod matcher;
pub mod subset;
pub mod validate;
pub mod verdict;

pub use cover::is_rule_covered;
pub use subset::is_operator_subset;
pub use validate::validate_boundary;
pub use verdict::{BoundaryVerdict, MissingPermission};
