//! Input validation for allocation runs.
//!
//! Checks structural integrity of requesters and resources before
//! allocation. Detects:
//! - Duplicate requester or resource IDs
//! - Equipment kinds listed twice in one requirement set
//! - Zero required equipment quantities (would make the partial-match
//!   ratio undefined)
//!
//! Only zero quantities make an allocation run fail. The allocator copes
//! with the other findings and logs them as warnings.

use crate::models::{EquipmentRequirement, Requester, Resource};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two requesters or two resources share the same ID.
    DuplicateId,
    /// An equipment ID appears twice in one requirement set.
    DuplicateEquipment,
    /// A requester asks for zero units of some equipment.
    InvalidQuantity,
}

impl ValidationErrorKind {
    /// Whether an allocation run must refuse input with this problem.
    pub fn rejects_input(self) -> bool {
        matches!(self, ValidationErrorKind::InvalidQuantity)
    }
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of an allocation run.
///
/// Checks:
/// 1. No duplicate requester IDs
/// 2. No duplicate resource IDs
/// 3. No equipment ID listed twice for the same requester or resource
/// 4. Every required equipment quantity is positive
///
/// Zero-capacity resources are valid: they score as undersized for any
/// requester needing a seat.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(requesters: &[Requester], resources: &[Resource]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut requester_ids = HashSet::new();
    for r in requesters {
        if !requester_ids.insert(r.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate requester ID: {}", r.id),
            ));
        }

        check_equipment_set(
            &r.preference.equipment,
            &format!("Requester {}", r.id),
            &mut errors,
        );

        for e in &r.preference.equipment {
            if e.quantity == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidQuantity,
                    format!("Requester {} requires zero units of '{}'", r.id, e.id),
                ));
            }
        }
    }

    let mut resource_ids = HashSet::new();
    for r in resources {
        if !resource_ids.insert(r.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", r.id),
            ));
        }

        check_equipment_set(
            &r.attributes.equipment,
            &format!("Resource {}", r.id),
            &mut errors,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_equipment_set(
    equipment: &[EquipmentRequirement],
    owner: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for e in equipment {
        if !seen.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEquipment,
                format!("{owner} lists equipment '{}' more than once", e.id),
            ));
        }
    }
}
