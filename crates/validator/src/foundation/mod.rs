//! Core validation types and traits
//!
//! This module contains the building blocks shared by every validator:
//!
//! - **Traits**: [`Validate`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type and return a structured
//! error with a stable code and named parameters:
//!
//! ```
//! use vincheck_validator::foundation::{Validate, ValidationError};
//!
//! struct NotBlank;
//!
//! impl Validate for NotBlank {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.trim().is_empty() {
//!             Err(ValidationError::new("not_blank", "Value must not be blank"))
//!         } else {
//!             Ok(())
//!         }
//!     }
//! }
//!
//! assert!(NotBlank.validate("1M8GDM9AXKP042788").is_ok());
//! assert!(NotBlank.validate("   ").is_err());
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::ValidationError;
pub use traits::Validate;
pub use validatable::AsValidatable;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
