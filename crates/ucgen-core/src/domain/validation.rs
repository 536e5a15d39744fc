use std::collections::BTreeSet;

use crate::domain::{error::DomainError, plan::Plan};

/// Centralized checks on values the domain hands to the outside world.
pub struct DomainValidator;

impl DomainValidator {
    /// Every action of a plan must target a distinct relative path.
    pub fn validate_plan(plan: &Plan) -> Result<(), DomainError> {
        let mut seen = BTreeSet::new();
        for action in plan.actions() {
            let path = action.path();
            if path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path) {
                return Err(DomainError::ConflictingPaths {
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }
}
