//! Why a candidate string is not a valid VIN.

use crate::foundation::ValidationError;

use super::VIN_LENGTH;

/// The first check a candidate failed, in algorithm order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum VinError {
    /// The trimmed candidate does not have exactly 17 characters.
    #[error("VIN must be exactly 17 characters, got {actual}")]
    InvalidLength {
        /// Character count after trimming.
        actual: usize,
    },

    /// A character outside `0-9` and the ISO 3779 letters (`I`, `O`, `Q`
    /// excluded).
    #[error("illegal character {character:?} at position {position}")]
    IllegalCharacter {
        /// 1-based position within the VIN.
        position: usize,
        /// The offending character, uppercased if it is an ASCII letter.
        character: char,
    },

    /// The 9th character does not match the computed check digit.
    #[error("check digit mismatch: expected '{expected}', found '{found}'")]
    CheckDigitMismatch {
        /// Check digit computed from the other 16 characters.
        expected: char,
        /// Character found at position 9.
        found: char,
    },
}

impl VinError {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "vin_length",
            Self::IllegalCharacter { .. } => "vin_illegal_character",
            Self::CheckDigitMismatch { .. } => "vin_check_digit",
        }
    }
}

impl From<VinError> for ValidationError {
    fn from(err: VinError) -> Self {
        let error = ValidationError::new(err.code(), err.to_string());
        match err {
            VinError::InvalidLength { actual } => error
                .with_param("expected", VIN_LENGTH.to_string())
                .with_param("actual", actual.to_string()),
            VinError::IllegalCharacter {
                position,
                character,
            } => error
                .with_param("position", position.to_string())
                .with_param("character", character.to_string())
                .with_help("VINs use digits and the letters A-Z except I, O and Q"),
            VinError::CheckDigitMismatch { expected, found } => error
                .with_param("expected", expected.to_string())
                .with_param("found", found.to_string()),
        }
    }
}
