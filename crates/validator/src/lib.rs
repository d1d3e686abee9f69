//! # vincheck-validator
//!
//! ISO 3779 check-digit validation for vehicle identification numbers.
//!
//! ## Quick Start
//!
//! ```
//! use vincheck_validator::is_valid_vin;
//!
//! assert!(is_valid_vin("1M8GDM9AXKP042788"));
//! assert!(is_valid_vin("  1m8gdm9axkp042788  "));
//! assert!(!is_valid_vin("1M8GDM9AXKP04I788"));
//! ```
//!
//! ## Why a VIN failed
//!
//! [`Vin::parse`] runs the same check and reports the first failure as a
//! [`VinError`]:
//!
//! ```
//! use vincheck_validator::{Vin, VinError};
//!
//! let vin: Vin = "1M8GDM9AXKP042788".parse().unwrap();
//! assert_eq!(vin.check_digit(), 'X');
//!
//! assert_eq!(
//!     Vin::parse("1N8GDM9AXKP042788"),
//!     Err(VinError::CheckDigitMismatch { expected: '6', found: 'X' }),
//! );
//! ```
//!
//! ## Composing with other validators
//!
//! [`VinValidator`](validators::VinValidator) implements the
//! [`Validate`](foundation::Validate) trait and reports structured
//! [`ValidationError`](foundation::ValidationError)s with stable codes.

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod foundation;
pub mod prelude;
pub mod validators;
pub mod vin;

pub use vin::{
    CHECK_DIGIT_POSITION, TRIMMED_PADDING, VIN_LENGTH, Vin, VinError, check_digit, is_valid_vin,
};
