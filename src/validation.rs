//! Input validation for rostering problems.
//!
//! Checks structural integrity of buses, drivers, and routes before
//! scheduling. Detects:
//! - Duplicate IDs
//! - Zero IDs (identifiers are positive)
//! - Routes without slots
//! - Inverted or empty slots (`start >= end`)
//!
//! Schedulers do not call this implicitly; callers opt in.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Bus, Driver, Route};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// An ID is zero.
    ZeroId,
    /// A route has no slots.
    EmptyRoute,
    /// A slot does not end after it starts.
    InvalidSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a rostering problem.
///
/// Checks:
/// 1. No duplicate or zero bus IDs
/// 2. No duplicate or zero driver IDs
/// 3. No duplicate or zero route IDs
/// 4. Every route has at least one slot
/// 5. Every slot satisfies `start < end`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(buses: &[Bus], drivers: &[Driver], routes: &[Route]) -> ValidationResult {
    let mut errors = Vec::new();

    check_ids("bus", buses.iter().map(|b| b.id), &mut errors);
    check_ids("driver", drivers.iter().map(|d| d.id), &mut errors);
    check_ids("route", routes.iter().map(|r| r.id), &mut errors);

    for route in routes {
        if route.slots.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRoute,
                format!("Route {} has no slots", route.id),
            ));
        }

        for (i, slot) in route.slots.iter().enumerate() {
            if !slot.is_well_formed() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidSlot,
                    format!(
                        "Route {} slot {} ({}) does not end after it starts",
                        route.id, i, slot
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_ids(entity: &str, ids: impl Iterator<Item = u32>, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for id in ids {
        if id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroId,
                format!("Zero {entity} ID"),
            ));
        }
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
}
