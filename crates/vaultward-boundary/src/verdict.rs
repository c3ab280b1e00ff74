//! Boundary check verdicts.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use vaultward_rules::RuleConditions;

/// One `(action, subject, conditions)` combination the child would
/// grant but the parent does not cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingPermission {
    /// The uncovered action.
    pub action: String,
    /// The subject the action applies to.
    pub subject: String,
    /// The child rule's conditions, when the failure came from a
    /// specific rule. `None` when the parent grants nothing at all for
    /// the action/subject pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<RuleConditions>,
}

impl fmt::Display for MissingPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.action, self.subject)?;
        if let Some(conditions) = &self.conditions {
            write!(f, " where")?;
            for (i, (field, operator)) in conditions.iter().enumerate() {
                if i > 0 {
                    write!(f, " and")?;
                }
                write!(f, " {field} {operator}")?;
            }
        }
        Ok(())
    }
}

/// The outcome of a boundary check.
///
/// A containment violation is a normal, expected outcome. It is
/// communicated entirely through [`Self::missing_permissions`],
/// never as an error.
///
/// Serializes as `{"isValid": …, "missingPermissions": […]}`, the shape
/// hosts surface to end users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryVerdict {
    missing_permissions: Vec<MissingPermission>,
}

impl BoundaryVerdict {
    pub(crate) fn new(missing_permissions: Vec<MissingPermission>) -> Self {
        Self {
            missing_permissions,
        }
    }

    /// `true` if the child rule set stays within the parent's boundary.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing_permissions.is_empty()
    }

    /// Every child permission the parent does not cover.
    #[must_use]
    pub fn missing_permissions(&self) -> &[MissingPermission] {
        &self.missing_permissions
    }

    /// Consumes the verdict, yielding the uncovered permissions.
    #[must_use]
    pub fn into_missing_permissions(self) -> Vec<MissingPermission> {
        self.missing_permissions
    }
}

impl Serialize for BoundaryVerdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BoundaryVerdict", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("missingPermissions", &self.missing_permissions)?;
        state.end()
    }
}
