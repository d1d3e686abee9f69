//! Built-in validators
//!
//! # Examples
//!
//! ```
//! use vincheck_validator::prelude::*;
//!
//! let validator = vin();
//! assert!(validator.validate("1M8GDM9AXKP042788").is_ok());
//! ```

pub mod vin;

pub use vin::{VinValidator, vin};
