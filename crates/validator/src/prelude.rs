//! Prelude module for convenient imports.
//!
//! Provides a single `use vincheck_validator::prelude::*;` import that brings
//! in the validation traits, the error types and the VIN API.
//!
//! # Examples
//!
//! ```
//! use vincheck_validator::prelude::*;
//!
//! assert!(is_valid_vin("1M8GDM9AXKP042788"));
//! assert!(vin().validate("1M8GDM9AXKP042788").is_ok());
//! ```

pub use crate::foundation::{AsValidatable, Validate, ValidationError, ValidationResult};

pub use crate::validators::{VinValidator, vin};

pub use crate::vin::{
    CHECK_DIGIT_POSITION, TRIMMED_PADDING, VIN_LENGTH, Vin, VinError, check_digit, is_valid_vin,
};
