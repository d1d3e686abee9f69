//! Integration tests for the public VIN API.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vincheck_validator::prelude::*;

const FIXTURE: &str = "1M8GDM9AXKP042788";

// ============================================================================
// LENGTH
// ============================================================================

#[rstest]
#[case("")]
#[case("1")]
#[case("1M8GDM9AXKP04278")]
#[case("1M8GDM9AXKP0427881")]
#[case("1M8GDM9AXKP042788 1M8GDM9AXKP042788")]
fn wrong_length_is_invalid(#[case] candidate: &str) {
    assert!(!is_valid_vin(candidate));
}

// ============================================================================
// CHARACTERS
// ============================================================================

#[rstest]
#[case("1M8GDM9AXKP04I788")]
#[case("1M8GDM9AXKP04i788")]
#[case("OM8GDM9AXKP042788")]
#[case("1M8GDM9AXKP04278q")]
fn i_o_q_are_invalid(#[case] candidate: &str) {
    assert!(!is_valid_vin(candidate));
}

#[rstest]
#[case("1M8GDM9AXKP04.788")]
#[case("1M8GDM9AXKP04/788")]
#[case("1M8GDM9AXKP04#788")]
#[case("1M8GDM9AXKP04+788")]
#[case("-M8GDM9AXKP042788")]
fn punctuation_is_invalid(#[case] candidate: &str) {
    assert!(!is_valid_vin(candidate));
}

#[rstest]
#[case::fullwidth_digit("1M8GDM9AXKP04278８")]
#[case::devanagari_digit("1M8GDM9AXKP04278८")]
#[case::cyrillic_a("1M8GDM9АXKP042788")]
#[case::zero_width_space("1M8GDM9AXKP04278\u{200b}")]
fn non_ascii_lookalikes_are_invalid(#[case] candidate: &str) {
    assert!(!is_valid_vin(candidate));
}

#[test]
fn x_is_legal_outside_the_check_slot() {
    assert!(is_valid_vin("XXXXXXXX7XXXXXXXX"));
}

// ============================================================================
// NORMALIZATION
// ============================================================================

#[test]
fn case_insensitive() {
    assert_eq!(is_valid_vin("1m8gdm9axkp042788"), is_valid_vin(FIXTURE));
    assert!(is_valid_vin("1m8gdm9axkp042788"));
}

#[test]
fn surrounding_whitespace_is_stripped() {
    assert!(is_valid_vin("  1M8GDM9AXKP042788  "));
    assert!(is_valid_vin("\t1M8GDM9AXKP042788\r\n"));
    assert!(is_valid_vin("1M8GDM9AXKP042788\0"));
    assert!(is_valid_vin("\x0B1M8GDM9AXKP042788"));
}

#[rstest]
#[case::nbsp("\u{00A0}1M8GDM9AXKP042788")]
#[case::nbsp_and_ideographic_space("\u{00A0}1M8GDM9AXKP042788\u{3000}")]
#[case::em_space("\u{2003}1M8GDM9AXKP042788")]
#[case::line_separator("1M8GDM9AXKP042788\u{2028}")]
fn unicode_whitespace_is_not_padding(#[case] candidate: &str) {
    assert!(!is_valid_vin(candidate));
}

// ============================================================================
// CHECK DIGIT
// ============================================================================

#[test]
fn known_valid_fixture() {
    assert!(is_valid_vin(FIXTURE));
}

#[test]
fn mutating_the_second_character_breaks_the_checksum() {
    assert!(!is_valid_vin("1N8GDM9AXKP042788"));
}

#[test]
fn remainder_ten_requires_x() {
    // weighted sum of the fixture is 351 = 31 * 11 + 10
    assert_eq!(check_digit(FIXTURE), Ok('X'));
    assert!(is_valid_vin("1M8GDM9AXKP042788"));
    assert!(!is_valid_vin("1M8GDM9A9KP042788"));
    assert!(!is_valid_vin("1M8GDM9A0KP042788"));
}

#[test]
fn check_digit_completion_agrees_with_validation() {
    for candidate in ["1HGCM826?3A004352", "5GZCZ43D?3S812715", "JH4KA756?PC008269"] {
        let vin = Vin::with_check_digit(candidate).unwrap();
        assert!(is_valid_vin(vin.as_str()), "{vin} should be valid");
    }
}

// ============================================================================
// PURITY
// ============================================================================

#[test]
fn repeated_calls_agree() {
    let first = is_valid_vin(FIXTURE);
    assert!((0..100).all(|_| is_valid_vin(FIXTURE) == first));
}

#[test]
fn concurrent_calls_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..1_000).all(|_| is_valid_vin(FIXTURE) && !is_valid_vin("1N8GDM9AXKP042788"))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

#[test]
fn validator_reports_structured_errors() {
    let validator = vin();

    let cases = [
        ("1M8GDM9AXKP04278", "vin_length"),
        ("1M8GDM9AXKP04I788", "vin_illegal_character"),
        ("1N8GDM9AXKP042788", "vin_check_digit"),
    ];

    for (candidate, code) in cases {
        let err = validator.validate(candidate).unwrap_err();
        assert_eq!(err.code, code, "candidate {candidate}");
    }
}

#[test]
fn validator_error_codes_match_vin_errors() {
    for candidate in ["", "1M8GDM9AXKP04I788", "1N8GDM9AXKP042788"] {
        let vin_err = Vin::parse(candidate).unwrap_err();
        let err = VinValidator::new().validate(candidate).unwrap_err();
        assert_eq!(err.code, vin_err.code());
        assert_eq!(err.message, vin_err.to_string());
    }
}

#[test]
fn validation_result_composes_with_the_vin_validator() {
    fn fleet(vins: &[&str]) -> ValidationResult<()> {
        vins.iter().try_for_each(|candidate| vin().validate(candidate))
    }

    assert!(fleet(&["1M8GDM9AXKP042788", "JH4KA7561PC008269"]).is_ok());
    assert_eq!(fleet(&["1M8GDM9AXKP042788", "short"]).unwrap_err().code, "vin_length");
}
