//! Basic usage example for vincheck-validator

use vincheck_validator::prelude::*;

fn main() {
    for candidate in [
        "1M8GDM9AXKP042788",
        " 1hgcm82633a004352 ",
        "1M8GDM9AXKP04278",
        "1M8GDM9AXKP04I788",
        "1N8GDM9AXKP042788",
    ] {
        match Vin::parse(candidate) {
            Ok(vin) => println!("✓ {vin} is valid (check digit {})", vin.check_digit()),
            Err(e) => println!("✗ {candidate:?} is invalid: {e}"),
        }
    }

    // Structured errors for use alongside other validators
    if let Err(e) = vin().validate("1N8GDM9AXKP042788") {
        println!("\n{e}");
    }

    // Fill in a missing check digit
    match Vin::with_check_digit("1N8GDM9A?KP042788") {
        Ok(vin) => println!("\ncompleted: {vin}"),
        Err(e) => println!("\ncannot complete: {e}"),
    }
}
