//! `AsValidatable` trait for universal input conversion
//!
//! Lets a validator over `str` accept owned, borrowed, boxed and
//! copy-on-write strings, plus JSON strings when the `serde` feature is on.

use crate::foundation::ValidationResult;
#[cfg(feature = "serde")]
use crate::foundation::ValidationError;
use std::borrow::{Borrow, Cow};

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses a GAT so implementations may hand out either a borrow or an owned
/// value, unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> ValidationResult<Self::Output<'_>>;
}

// ============================================================================
// STRING CONVERSIONS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> ValidationResult<&str> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> ValidationResult<&str> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for &String {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> ValidationResult<&str> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for Box<str> {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> ValidationResult<&str> {
        Ok(self)
    }
}

impl AsValidatable<str> for Cow<'_, str> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> ValidationResult<&str> {
        Ok(self.as_ref())
    }
}

// ============================================================================
// JSON CONVERSIONS
// ============================================================================

#[cfg(feature = "serde")]
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(feature = "serde")]
impl AsValidatable<str> for serde_json::Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> ValidationResult<&str> {
        match self {
            serde_json::Value::String(s) => Ok(s.as_str()),
            other => Err(ValidationError::type_mismatch(
                "string",
                json_type_name(other),
            )),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
