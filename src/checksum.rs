//! # Check Digits
//!
//! The two weighted check-digit schemes used by Brazilian bank slips.
//!
//! | Scheme | Weights (right to left) | Used for |
//! |--------|-------------------------|----------|
//! | Modulo 11 | 2, 3, 4, 5, 6, 7, 8, 9, 2, ... | Barcode check digit (position 4) |
//! | Modulo 10 | 2, 1, 2, 1, ... | Per-field check digits of the printed number |
//!
//! ## Example
//!
//! ```
//! use boleto::checksum::modulo11_digit;
//!
//! assert_eq!(modulo11_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap(), 7);
//! ```

use crate::error::BoletoError;

/// Compute the modulo-11 check digit of a digit sequence.
///
/// Digits are weighted from the last one backwards with the cycle
/// `2..=9`. The result is `(11 - sum % 11) % 10`, except that a result of
/// `0` is reported as `1`, so the digit is always in `1..=9`.
pub fn modulo11_digit(digits: &[u8]) -> Result<u8, BoletoError> {
    check_digits(digits)?;

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| d as u32 * ((i as u32 % 8) + 2))
        .sum();

    let digit = ((11 - sum % 11) % 10) as u8;
    if digit == 0 { Ok(1) } else { Ok(digit) }
}

/// Compute the modulo-10 check digit of a digit sequence.
///
/// Weights alternate 2, 1, 2, 1... starting from the last digit. Two-digit
/// products contribute the sum of their digits.
pub fn modulo10_digit(digits: &[u8]) -> Result<u8, BoletoError> {
    check_digits(digits)?;

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let product = d as u32 * if i % 2 == 0 { 2 } else { 1 };
            product / 10 + product % 10
        })
        .sum();

    Ok(((10 - sum % 10) % 10) as u8)
}

/// Parse a string of ASCII digits into their numeric values.
///
/// Any other character is rejected rather than skipped.
pub fn parse_digits(s: &str) -> Result<Vec<u8>, BoletoError> {
    s.bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(BoletoError::InvalidInput(format!(
                    "'{}' is not a digit",
                    b as char
                )))
            }
        })
        .collect()
}

fn check_digits(digits: &[u8]) -> Result<(), BoletoError> {
    if digits.is_empty() {
        return Err(BoletoError::InvalidInput(
            "cannot compute a check digit of an empty sequence".to_string(),
        ));
    }
    if let Some(bad) = digits.iter().find(|&&d| d > 9) {
        return Err(BoletoError::InvalidInput(format!(
            "{} is not a single digit",
            bad
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo11_known_value() {
        // 9*2 + 8*3 + 7*4 + 6*5 + 5*6 + 4*7 + 3*8 + 2*9 + 1*2 = 202, 202 % 11 = 4
        assert_eq!(modulo11_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap(), 7);
    }

    #[test]
    fn test_modulo11_weights_restart_after_eight() {
        // Ninth digit from the right gets weight 2 again: 1*2 = 2, 11 - 2 = 9
        let digits = [1, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(modulo11_digit(&digits).unwrap(), 9);
    }

    #[test]
    fn test_modulo11_remainder_one_becomes_one() {
        // 6*2 = 12, 12 % 11 = 1, (11 - 1) % 10 = 0 -> 1
        assert_eq!(modulo11_digit(&[6]).unwrap(), 1);
    }

    #[test]
    fn test_modulo11_remainder_zero_becomes_one() {
        // 4*2 + 1*3 = 11, 11 % 11 = 0, (11 - 0) % 10 = 1
        assert_eq!(modulo11_digit(&[1, 4]).unwrap(), 1);
        assert_eq!(modulo11_digit(&[0; 43]).unwrap(), 1);
    }

    #[test]
    fn test_modulo11_never_zero() {
        for n in 0..10_000u32 {
            let digits = parse_digits(&format!("{:04}", n)).unwrap();
            let digit = modulo11_digit(&digits).unwrap();
            assert!((1..=9).contains(&digit), "{} gave {}", n, digit);
        }
    }

    #[test]
    fn test_modulo11_empty_is_invalid() {
        assert!(matches!(
            modulo11_digit(&[]),
            Err(BoletoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_modulo11_rejects_non_digit_values() {
        assert!(matches!(
            modulo11_digit(&[1, 10, 3]),
            Err(BoletoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_modulo10_field_check_digits() {
        assert_eq!(modulo10_digit(&parse_digits("001900000").unwrap()).unwrap(), 9);
        assert_eq!(modulo10_digit(&parse_digits("0000000001").unwrap()).unwrap(), 8);
    }

    #[test]
    fn test_modulo10_sums_product_digits() {
        // 9*2 = 18 -> 1 + 8 = 9, (10 - 9) % 10 = 1
        assert_eq!(modulo10_digit(&[9]).unwrap(), 1);
        // 5*2 = 10 -> 1, then 0 -> (10 - 1) = 9
        assert_eq!(modulo10_digit(&[0, 5]).unwrap(), 9);
    }

    #[test]
    fn test_modulo10_zero_sum() {
        assert_eq!(modulo10_digit(&[0, 0, 0]).unwrap(), 0);
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("0123").unwrap(), vec![0, 1, 2, 3]);
        assert!(parse_digits("12a3").is_err());
        assert!(parse_digits("").unwrap().is_empty());
    }
}
