//! Interleaved 2 of 5 encoding.
//!
//! Uses the barcoders crate for the module pattern, then collapses runs of
//! equal modules into [`Stripe`]s.

use barcoders::sym::tf::TF;
use tracing::debug;

use super::{Stripe, StripeColor, SymbolEncoder, SymbolError};

/// Encoder for the ITF symbology printed on bank slips.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItfEncoder;

impl SymbolEncoder for ItfEncoder {
    fn encode(&self, digits: &str) -> Result<Vec<Stripe>, SymbolError> {
        if digits.is_empty() {
            return Err(SymbolError::InvalidSymbolInput(
                "nothing to encode".to_string(),
            ));
        }
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(SymbolError::InvalidSymbolInput(format!(
                "'{}' is not a digit",
                c
            )));
        }
        // barcoders appends its own check digit to odd-length input, which
        // would change the payload.
        if digits.len() % 2 != 0 {
            return Err(SymbolError::InvalidSymbolInput(format!(
                "interleaved 2 of 5 needs an even number of digits, got {}",
                digits.len()
            )));
        }

        let barcode = TF::interleaved(digits)
            .map_err(|e| SymbolError::InvalidSymbolInput(format!("{:?}", e)))?;
        let stripes = to_stripes(&barcode.encode());

        debug!(digits = digits.len(), stripes = stripes.len(), "encoded ITF symbol");
        Ok(stripes)
    }
}

/// Collapse a module vector (1 = bar, 0 = space) into stripes.
fn to_stripes(modules: &[u8]) -> Vec<Stripe> {
    let mut stripes: Vec<Stripe> = Vec::new();

    for &module in modules {
        let color = if module == 1 {
            StripeColor::Bar
        } else {
            StripeColor::Space
        };
        match stripes.last_mut() {
            Some(last) if last.color == color => last.width += 1,
            _ => stripes.push(Stripe { color, width: 1 }),
        }
    }

    stripes
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARCODE: &str = "34196791200000106511090087379487100010651101";

    #[test]
    fn test_to_stripes_run_length() {
        let stripes = to_stripes(&[1, 0, 1, 1, 1, 0, 0, 1]);
        assert_eq!(
            stripes,
            vec![
                Stripe::bar(1),
                Stripe::space(1),
                Stripe::bar(3),
                Stripe::space(2),
                Stripe::bar(1),
            ]
        );
        assert!(to_stripes(&[]).is_empty());
    }

    #[test]
    fn test_encode_barcode() {
        let stripes = ItfEncoder.encode(BARCODE).unwrap();
        assert!(!stripes.is_empty());
        assert!(stripes.first().unwrap().is_bar());
        assert!(stripes.last().unwrap().is_bar());
        assert!(stripes.iter().any(|s| s.is_wide()));
        assert!(stripes.iter().any(|s| !s.is_wide()));
    }

    #[test]
    fn test_encode_alternates_colors() {
        let stripes = ItfEncoder.encode(BARCODE).unwrap();
        for pair in stripes.windows(2) {
            assert_ne!(pair[0].color, pair[1].color);
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(
            ItfEncoder.encode(BARCODE).unwrap(),
            ItfEncoder.encode(BARCODE).unwrap()
        );
        assert_ne!(
            ItfEncoder.encode(BARCODE).unwrap(),
            ItfEncoder.encode("00000000000000000000000000000000000000000000").unwrap()
        );
    }

    #[test]
    fn test_encode_rejects_non_digits() {
        assert!(matches!(
            ItfEncoder.encode("12a4"),
            Err(SymbolError::InvalidSymbolInput(_))
        ));
        assert!(matches!(
            ItfEncoder.encode("34191.09008"),
            Err(SymbolError::InvalidSymbolInput(_))
        ));
    }

    #[test]
    fn test_encode_rejects_empty_and_odd() {
        assert!(matches!(
            ItfEncoder.encode(""),
            Err(SymbolError::InvalidSymbolInput(_))
        ));
        assert!(matches!(
            ItfEncoder.encode("123"),
            Err(SymbolError::InvalidSymbolInput(_))
        ));
    }
}
