//! Core traits for the validation system

use crate::foundation::{AsValidatable, ValidationResult};
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type so a validator only accepts what it can
/// check. Every validator returns a [`ValidationResult<()>`](ValidationResult).
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> ValidationResult<()>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// A single validator accepts `&str`, `String`, `Cow<str>` and, with the
    /// `serde` feature, `serde_json::Value` strings without explicit
    /// conversion by the caller. A failed conversion is reported as the
    /// validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use vincheck_validator::foundation::Validate;
    /// use vincheck_validator::validators::vin;
    ///
    /// let validator = vin();
    /// assert!(validator.validate_any("1M8GDM9AXKP042788").is_ok());
    /// assert!(validator.validate_any(&String::from("1M8GDM9AXKP042788")).is_ok());
    /// assert!(validator.validate_any(&Cow::Borrowed("1M8GDM9AXKP042788")).is_ok());
    /// ```
    fn validate_any<S>(&self, value: &S) -> ValidationResult<()>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

// ============================================================================
// TESTS
// ============================================================================
