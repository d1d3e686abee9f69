//! ISO 3779 transliteration and weight tables.

use super::VIN_LENGTH;

/// Transliteration values for `A..=Z`, indexed by `letter - b'A'`.
///
/// `0` marks a letter that may not appear in a VIN (`I`, `O`, `Q`).
const LETTER_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, // A-H
    0, // I
    1, 2, 3, 4, 5, // J-N
    0, // O
    7, // P
    0, // Q
    9, // R
    2, 3, 4, 5, 6, 7, 8, 9, // S-Z
];

/// Positional weights, one per VIN character. The check-digit slot weighs 0.
pub const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Numeric value of a VIN character, or `None` if it may not appear in a VIN.
///
/// Only ASCII digits and the uppercase letters of the transliteration table
/// are accepted; callers uppercase before looking up.
#[inline]
pub const fn transliterate(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => match LETTER_VALUES[(c as u32 - 'A' as u32) as usize] {
            0 => None,
            value => Some(value as u32),
        },
        _ => None,
    }
}

/// Check digit character for a weighted sum.
#[inline]
pub const fn check_digit_for(total: u32) -> char {
    match total % 11 {
        10 => 'X',
        // remainder is always < 10 here
        remainder => (b'0' + remainder as u8) as char,
    }
}
