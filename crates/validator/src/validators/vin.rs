//! VIN validator.
//!
//! Validates vehicle identification numbers against the ISO 3779 check digit.

use crate::foundation::{Validate, ValidationError, ValidationResult};
use crate::vin::Vin;

// ============================================================================
// VIN VALIDATOR
// ============================================================================

/// Validates 17-character VINs (ISO 3779 check digit).
///
/// Input is trimmed and matched case-insensitively. Failures carry one of
/// the codes `vin_length`, `vin_illegal_character` or `vin_check_digit`.
///
/// # Examples
///
/// ```
/// use vincheck_validator::validators::VinValidator;
/// use vincheck_validator::foundation::Validate;
///
/// let validator = VinValidator::new();
///
/// assert!(validator.validate("1M8GDM9AXKP042788").is_ok());
/// assert!(validator.validate(" 1m8gdm9axkp042788 ").is_ok());
///
/// let err = validator.validate("1N8GDM9AXKP042788").unwrap_err();
/// assert_eq!(err.code, "vin_check_digit");
/// assert_eq!(err.param("expected"), Some("6"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VinValidator;

impl VinValidator {
    /// Creates a new VIN validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validate for VinValidator {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult<()> {
        Vin::parse(input).map(drop).map_err(ValidationError::from)
    }
}

/// Creates a [`VinValidator`].
#[must_use]
pub const fn vin() -> VinValidator {
    VinValidator
}

// ============================================================================
// TESTS
// ============================================================================
