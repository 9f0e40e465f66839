//! Error types.

use crate::validation::ValidationError;

/// Errors returned by the allocation engine.
///
/// Incompatibility and missing matches are not errors; they are ordinary
/// outcomes reported through [`crate::scoring::Compatibility`] and through
/// omission from the timetable.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("requester {requester_id} requires zero units of equipment '{equipment_id}'")]
    InvalidQuantity {
        requester_id: u64,
        equipment_id: String,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display() {
        let e = AllocationError::InvalidQuantity {
            requester_id: 3,
            equipment_id: "pipette".into(),
        };
        assert_eq!(
            e.to_string(),
            "requester 3 requires zero units of equipment 'pipette'"
        );

        let e = AllocationError::InvalidInput(vec![
            ValidationError::new(
                ValidationErrorKind::InvalidQuantity,
                "Requester 1 requires zero units of 'bench'",
            ),
            ValidationError::new(
                ValidationErrorKind::InvalidQuantity,
                "Requester 2 requires zero units of 'scope'",
            ),
        ]);
        assert_eq!(
            e.to_string(),
            "invalid input: Requester 1 requires zero units of 'bench'; Requester 2 requires zero units of 'scope'"
        );
    }
}
