//! Input validation for scheduling runs.
//!
//! Checks the preconditions the engine assumes before any search
//! starts. Detects:
//! - Empty exam or room lists
//! - Duplicate exam/room IDs
//! - Negative cost weights
//! - Invalid engine configuration (zero colony size or cycle budget)
//!
//! Degenerate-but-solvable inputs — e.g. no room large enough for some
//! exam — are deliberately *not* rejected here: they surface as a
//! nonzero capacity cost in the returned best solution.

use std::collections::HashSet;

use crate::abc::AbcConfig;
use crate::cost::CostWeights;
use crate::models::{Exam, Room};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The exam list is empty.
    EmptyExamList,
    /// The room list is empty.
    EmptyRoomList,
    /// Two entities share the same ID.
    DuplicateId,
    /// A cost weight is negative or not finite.
    InvalidWeight,
    /// The engine configuration is invalid.
    InvalidConfig,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the reference data and weights for a scheduling run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(exams: &[Exam], rooms: &[Room], weights: &CostWeights) -> ValidationResult {
    let mut errors = Vec::new();

    if exams.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyExamList,
            "no exams to schedule",
        ));
    }
    if rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoomList,
            "no rooms to assign exams to",
        ));
    }

    let mut exam_ids = HashSet::new();
    for exam in exams {
        if !exam_ids.insert(exam.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate exam ID: {}", exam.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for room in rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
    }

    if let Err(message) = weights.validate() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWeight,
            message,
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the engine configuration, folded into the same error shape
/// as [`validate_input`] for facade callers.
pub fn validate_config(config: &AbcConfig) -> ValidationResult {
    match config.validate() {
        Ok(()) => Ok(()),
        Err(message) => Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            message,
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_exams() -> Vec<Exam> {
        vec![Exam::new("CS101", 30), Exam::new("MA201", 45)]
    }

    fn sample_rooms() -> Vec<Room> {
        vec![Room::new("A-1", 60), Room::new("A-2", 40)]
    }

    #[test]
    fn test_valid_input() {
        let result = validate_input(&sample_exams(), &sample_rooms(), &CostWeights::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_exam_list() {
        let errors = validate_input(&[], &sample_rooms(), &CostWeights::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyExamList));
    }

    #[test]
    fn test_empty_room_list() {
        let errors = validate_input(&sample_exams(), &[], &CostWeights::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyRoomList));
    }

    #[test]
    fn test_duplicate_exam_id() {
        let exams = vec![Exam::new("CS101", 30), Exam::new("CS101", 40)];
        let errors = validate_input(&exams, &sample_rooms(), &CostWeights::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("exam")));
    }

    #[test]
    fn test_duplicate_room_id() {
        let rooms = vec![Room::new("A-1", 60), Room::new("A-1", 80)];
        let errors = validate_input(&sample_exams(), &rooms, &CostWeights::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_negative_weight() {
        let weights = CostWeights::default().with_capacity(-1.0);
        let errors = validate_input(&sample_exams(), &sample_rooms(), &weights).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidWeight));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let weights = CostWeights::default().with_waste(-5.0);
        let errors = validate_input(&[], &[], &weights).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_invalid_config() {
        let config = AbcConfig::default().with_max_cycles(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidConfig);
    }

    #[test]
    fn test_undersized_rooms_are_not_an_error() {
        // Unsatisfiable capacity is a degenerate-but-valid input.
        let exams = vec![Exam::new("BIG", 500)];
        let rooms = vec![Room::new("TINY", 10)];
        assert!(validate_input(&exams, &rooms, &CostWeights::default()).is_ok());
    }
}
