//! Vehicle identification numbers and the ISO 3779 check digit.
//!
//! A candidate is trimmed and uppercased, must be exactly 17 characters
//! drawn from `0-9` and `A-Z` without `I`, `O` and `Q`, and its 9th
//! character must equal the check digit computed from the other 16:
//! each character's transliterated value times its positional weight,
//! summed, modulo 11, with a remainder of 10 written as `X`.
//!
//! ```
//! use vincheck_validator::vin::{Vin, check_digit, is_valid_vin};
//!
//! assert!(is_valid_vin("1M8GDM9AXKP042788"));
//!
//! // Position 9 is ignored when computing the check digit.
//! assert_eq!(check_digit("1M8GDM9A?KP042788"), Ok('X'));
//! assert_eq!(
//!     Vin::with_check_digit("1m8gdm9a_kp042788").unwrap().as_str(),
//!     "1M8GDM9AXKP042788",
//! );
//! ```

mod error;
pub mod tables;

use std::fmt;
use std::str::FromStr;

pub use error::VinError;

/// Number of characters in a VIN.
pub const VIN_LENGTH: usize = 17;

/// 0-based index of the check digit (the 9th character).
pub const CHECK_DIGIT_POSITION: usize = 8;

/// Padding stripped from both ends of a candidate. Other Unicode whitespace
/// (NBSP, ideographic space, ...) is kept and makes the candidate invalid.
pub const TRIMMED_PADDING: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Returns `true` if `candidate` is a valid 17-character VIN.
///
/// Leading and trailing [`TRIMMED_PADDING`] is ignored and letters are matched
/// case-insensitively. Never panics: malformed input is simply `false`.
///
/// ```
/// use vincheck_validator::is_valid_vin;
///
/// assert!(is_valid_vin("1M8GDM9AXKP042788"));
/// assert!(!is_valid_vin("1M8GDM9AXKP04278"));
/// assert!(!is_valid_vin("1M8GDM9AXKP04I788"));
/// assert!(!is_valid_vin("1N8GDM9AXKP042788"));
/// ```
#[must_use]
pub fn is_valid_vin(candidate: &str) -> bool {
    verify(candidate).is_ok()
}

/// Computes the check digit for `candidate`.
///
/// The candidate is normalized like [`is_valid_vin`] and must have 17
/// characters. Whatever sits in the check-digit slot is ignored, so a
/// placeholder such as `?` or `_` is accepted there; every other position
/// must hold a legal VIN character.
pub fn check_digit(candidate: &str) -> Result<char, VinError> {
    scan(candidate, CheckSlot::Ignore).map(|scan| tables::check_digit_for(scan.total))
}

// ============================================================================
// VIN
// ============================================================================

/// A validated vehicle identification number.
///
/// Always 17 uppercase ASCII characters with a correct check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Vin(String);

impl Vin {
    /// Validates and normalizes `candidate`.
    pub fn parse(candidate: &str) -> Result<Self, VinError> {
        verify(candidate).map(Scan::into_vin)
    }

    /// Normalizes `candidate` and writes the computed check digit into the
    /// 9th position, ignoring whatever was there.
    pub fn with_check_digit(candidate: &str) -> Result<Self, VinError> {
        let mut scan = scan(candidate, CheckSlot::Ignore)?;
        scan.chars[CHECK_DIGIT_POSITION] = tables::check_digit_for(scan.total);
        Ok(scan.into_vin())
    }

    /// The normalized VIN.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 9th character.
    #[must_use]
    pub fn check_digit(&self) -> char {
        // always ASCII
        char::from(self.0.as_bytes()[CHECK_DIGIT_POSITION])
    }

    /// Consumes the VIN, returning the normalized string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Vin {
    type Error = VinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Vin {
    type Error = VinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

// ============================================================================
// SCAN
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckSlot {
    /// The check digit must be a legal VIN character.
    Verify,
    /// The check digit may be anything; it is about to be replaced.
    Ignore,
}

/// Normalized characters of a 17-character candidate and their weighted sum.
struct Scan {
    chars: [char; VIN_LENGTH],
    total: u32,
}

impl Scan {
    fn into_vin(self) -> Vin {
        Vin(self.chars.iter().collect())
    }
}

fn scan(candidate: &str, slot: CheckSlot) -> Result<Scan, VinError> {
    let trimmed = candidate.trim_matches(TRIMMED_PADDING);

    let actual = trimmed.chars().count();
    if actual != VIN_LENGTH {
        return Err(VinError::InvalidLength { actual });
    }

    let mut chars = ['0'; VIN_LENGTH];
    let mut total = 0;
    for (index, (slot_char, c)) in chars.iter_mut().zip(trimmed.chars()).enumerate() {
        let c = c.to_ascii_uppercase();
        *slot_char = c;

        if index == CHECK_DIGIT_POSITION && slot == CheckSlot::Ignore {
            continue;
        }

        let value = tables::transliterate(c).ok_or(VinError::IllegalCharacter {
            position: index + 1,
            character: c,
        })?;
        total += value * tables::WEIGHTS[index];
    }

    Ok(Scan { chars, total })
}

fn verify(candidate: &str) -> Result<Scan, VinError> {
    let scan = scan(candidate, CheckSlot::Verify)?;

    let expected = tables::check_digit_for(scan.total);
    let found = scan.chars[CHECK_DIGIT_POSITION];
    if found != expected {
        return Err(VinError::CheckDigitMismatch { expected, found });
    }

    Ok(scan)
}

// ============================================================================
// TESTS
// ============================================================================
