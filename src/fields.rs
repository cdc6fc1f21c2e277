//! # Field Layout
//!
//! Fixed-position transforms between the 47-digit printed number (the
//! "linha digitável") and the 44-digit barcode, and the field table used to
//! read semantic values out of the barcode.
//!
//! ## Printed Number
//!
//! ```text
//! AAAA BBBBB x CCCCCCCCCC x DDDDDDDDDD x EEEEEEEEEEEEEEE
//!  4     5   1     10     1     10     1       15
//! ```
//!
//! `A` is bank + currency, `E` is checksum + due date + amount, and
//! `B`, `C`, `D` carry the free field.
//! The barcode is `A + E + B + C + D`. The three `x` digits are modulo-10
//! check digits of their field and are not carried into the barcode.
//!
//! ## Barcode Fields
//!
//! | Field | Range | Meaning |
//! |-------|-------|---------|
//! | bank code | 0..3 | Issuing bank |
//! | currency | 3..4 | `9` = Brazilian Real |
//! | checksum | 4..5 | Modulo-11 check digit |
//! | due date | 5..9 | Days since 1997-10-07 |
//! | amount | 9..19 | Amount in cents |
//! | free field | 19..44 | Bank-specific payload |

use std::ops::Range;

use crate::checksum::{modulo10_digit, parse_digits};
use crate::error::BoletoError;

/// Length of the printed bank slip number.
pub const PRINTED_LEN: usize = 47;

/// Length of the barcode.
pub const BARCODE_LEN: usize = 44;

/// A named, fixed-width slice of the barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub start: usize,
    pub len: usize,
}

impl Field {
    pub const fn new(name: &'static str, start: usize, len: usize) -> Self {
        Self { name, start, len }
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Read this field out of a barcode.
    pub fn read<'a>(&self, barcode: &'a str) -> Result<&'a str, BoletoError> {
        expect_digits(barcode, BARCODE_LEN, "barcode")?;
        Ok(&barcode[self.range()])
    }
}

pub const BANK_CODE: Field = Field::new("bank_code", 0, 3);
pub const CURRENCY_CODE: Field = Field::new("currency_code", 3, 1);
pub const CHECKSUM: Field = Field::new("checksum", 4, 1);
pub const DUE_DATE_OFFSET: Field = Field::new("due_date_offset", 5, 4);
pub const AMOUNT: Field = Field::new("amount", 9, 10);
pub const FREE_FIELD: Field = Field::new("free_field", 19, 25);

/// Every barcode field, in order. Together they cover all 44 positions.
pub const BARCODE_FIELDS: [Field; 6] = [
    BANK_CODE,
    CURRENCY_CODE,
    CHECKSUM,
    DUE_DATE_OFFSET,
    AMOUNT,
    FREE_FIELD,
];

/// Slices of the printed number that make up the barcode, in barcode order.
const BARCODE_FROM_PRINTED: [Range<usize>; 5] = [0..4, 32..47, 4..9, 10..20, 21..31];

/// Group widths of the human-readable layout and the separator after each.
const PRETTY_GROUPS: [(usize, Option<char>); 8] = [
    (5, Some('.')),
    (5, Some(' ')),
    (5, Some('.')),
    (6, Some(' ')),
    (5, Some('.')),
    (6, Some(' ')),
    (1, Some(' ')),
    (14, None),
];

/// Strip everything that is not an ASCII digit.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Rearrange a 47-digit printed number into its 44-digit barcode.
pub fn to_barcode(printed: &str) -> Result<String, BoletoError> {
    expect_digits(printed, PRINTED_LEN, "printed number")?;
    Ok(barcode_of(printed))
}

/// Rebuild the 47-digit printed number from a 44-digit barcode.
///
/// The three field check digits are recomputed with modulo 10.
pub fn to_printed(barcode: &str) -> Result<String, BoletoError> {
    expect_digits(barcode, BARCODE_LEN, "barcode")?;

    let field1 = format!("{}{}", &barcode[0..4], &barcode[19..24]);
    let field2 = &barcode[24..34];
    let field3 = &barcode[34..44];

    let mut printed = String::with_capacity(PRINTED_LEN);
    for field in [field1.as_str(), field2, field3] {
        let check = modulo10_digit(&parse_digits(field)?)?;
        printed.push_str(field);
        printed.push(char::from(b'0' + check));
    }
    printed.push_str(&barcode[4..19]);

    Ok(printed)
}

/// Format a 47-digit printed number as
/// `NNNNN.NNNNN NNNNN.NNNNNN NNNNN.NNNNNN N NNNNNNNNNNNNNN`.
pub fn pretty_print(printed: &str) -> Result<String, BoletoError> {
    expect_digits(printed, PRINTED_LEN, "printed number")?;
    Ok(pretty_of(printed))
}

/// Barcode of a printed number already known to be 47 digits.
pub(crate) fn barcode_of(printed: &str) -> String {
    BARCODE_FROM_PRINTED
        .iter()
        .map(|range| &printed[range.clone()])
        .collect()
}

/// Pretty form of a printed number already known to be 47 digits.
pub(crate) fn pretty_of(printed: &str) -> String {
    let mut out = String::with_capacity(PRINTED_LEN + PRETTY_GROUPS.len());
    let mut pos = 0;
    for (width, separator) in PRETTY_GROUPS {
        out.push_str(&printed[pos..pos + width]);
        if let Some(sep) = separator {
            out.push(sep);
        }
        pos += width;
    }
    out
}

/// Numeric value of a run of ASCII digits.
pub(crate) fn digits_value(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u64::from(b.wrapping_sub(b'0')))
}

fn expect_digits(s: &str, len: usize, what: &str) -> Result<(), BoletoError> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BoletoError::InvalidInput(format!(
            "{} must be exactly {} digits, got '{}'",
            what, len, s
        )));
    }
    Ok(())
}
