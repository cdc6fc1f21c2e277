//! # Bank Slip Record
//!
//! [`Boleto`] is a validated 47-digit bank slip number. Construction is the
//! only place validation happens: a `Boleto` that exists always has the
//! right length and a matching barcode checksum. Every accessor derives its
//! value from the stored digits on each call.
//!
//! ## Example
//!
//! ```
//! use boleto::Boleto;
//!
//! let boleto = Boleto::new("34191.09008 87379.487108 00106.511017 6 79120000010651")?;
//!
//! assert_eq!(boleto.bank(), "Itaú");
//! assert_eq!(boleto.amount(), "106.51");
//! assert_eq!(boleto.pretty_amount(), "R$ 106,51");
//! assert_eq!(boleto.due_date().to_string(), "2019-06-06");
//! # Ok::<(), boleto::BoletoError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::bank;
use crate::checksum::{modulo11_digit, parse_digits};
use crate::currency::Currency;
use crate::error::BoletoError;
use crate::fields::{
    self, AMOUNT, BANK_CODE, CHECKSUM, CURRENCY_CODE, DUE_DATE_OFFSET, FREE_FIELD, Field,
    PRINTED_LEN,
};
use crate::symbol::{SymbolEncoder, SymbolError, SymbolRenderer};

/// Day zero of the due-date offset field.
pub fn due_date_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1997, 10, 7).unwrap_or_default()
}

/// A validated bank slip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boleto {
    number: String,
}

impl Boleto {
    /// Build a bank slip from its printed number.
    ///
    /// Everything except ASCII digits is discarded first, so both
    /// `"34191.09008 87379..."` and the bare digits are accepted.
    pub fn new(input: &str) -> Result<Self, BoletoError> {
        let number = fields::digits_only(input);

        if number.len() != PRINTED_LEN {
            debug!(digits = number.len(), "rejected bank slip: wrong length");
            return Err(BoletoError::InvalidBankSlipNumber(format!(
                "expected {} digits, got {}",
                PRINTED_LEN,
                number.len()
            )));
        }

        let boleto = Self { number };
        let expected = boleto.expected_checksum()?;
        let found = boleto.checksum();
        if expected != found {
            debug!(expected, found, "rejected bank slip: checksum mismatch");
            return Err(BoletoError::InvalidBankSlipNumber(format!(
                "checksum mismatch: expected {}, found {}",
                expected, found
            )));
        }

        Ok(boleto)
    }

    /// Build a bank slip from its 44-digit barcode.
    pub fn from_barcode(input: &str) -> Result<Self, BoletoError> {
        let barcode = fields::digits_only(input);
        let printed = fields::to_printed(&barcode)
            .map_err(|e| BoletoError::InvalidBankSlipNumber(e.to_string()))?;
        Self::new(&printed)
    }

    /// Re-check length and checksum.
    ///
    /// Always true for a constructed value.
    pub fn is_valid(&self) -> bool {
        self.number.len() == PRINTED_LEN
            && self
                .expected_checksum()
                .is_ok_and(|expected| expected == self.checksum())
    }

    /// The 47 digits of the printed number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The printed number in its usual masked layout.
    pub fn pretty_number(&self) -> String {
        fields::pretty_of(&self.number)
    }

    /// The 44-digit barcode.
    pub fn barcode(&self) -> String {
        fields::barcode_of(&self.number)
    }

    pub fn bank_code(&self) -> String {
        self.field(BANK_CODE)
    }

    /// Bank name, or `"Unknown"` for codes outside the lookup table.
    pub fn bank(&self) -> &'static str {
        bank::name_for(&self.bank_code())
    }

    pub fn currency(&self) -> Currency {
        Currency::from_digit(&self.field(CURRENCY_CODE))
    }

    /// The barcode's own check digit.
    pub fn checksum(&self) -> u8 {
        fields::digits_value(&self.field(CHECKSUM)) as u8
    }

    pub fn due_date_offset(&self) -> u32 {
        fields::digits_value(&self.field(DUE_DATE_OFFSET)) as u32
    }

    /// Due date: the epoch plus the offset in whole days.
    pub fn due_date(&self) -> NaiveDate {
        due_date_epoch() + Days::new(u64::from(self.due_date_offset()))
    }

    pub fn amount_cents(&self) -> u64 {
        fields::digits_value(&self.field(AMOUNT))
    }

    /// Amount with exactly two decimals, e.g. `"106.51"`.
    pub fn amount(&self) -> String {
        let cents = self.amount_cents();
        format!("{}.{:02}", cents / 100, cents % 100)
    }

    /// Amount with currency symbol and decimal separator, e.g. `"R$ 106,51"`.
    ///
    /// Falls back to [`Boleto::amount`] when the currency is unknown.
    pub fn pretty_amount(&self) -> String {
        let currency = self.currency();
        match (currency.symbol(), currency.decimal_separator()) {
            (Some(symbol), Some(decimal)) => {
                format!("{} {}", symbol, self.amount().replace('.', &decimal.to_string()))
            }
            _ => self.amount(),
        }
    }

    /// Bank-specific payload of the barcode.
    pub fn free_field(&self) -> String {
        self.field(FREE_FIELD)
    }

    /// Encode the barcode and draw it on `target`.
    ///
    /// Errors from either collaborator are returned as-is.
    pub fn render_symbol<E, R>(
        &self,
        encoder: &E,
        renderer: &mut R,
        target: &R::Target,
    ) -> Result<(), SymbolError>
    where
        E: SymbolEncoder + ?Sized,
        R: SymbolRenderer + ?Sized,
    {
        let stripes = encoder.encode(&self.barcode())?;
        renderer.render(&stripes, target)
    }

    /// Serializable snapshot of every derived value.
    pub fn summary(&self) -> BoletoSummary {
        let currency = self.currency();
        BoletoSummary {
            number: self.number.clone(),
            pretty_number: self.pretty_number(),
            barcode: self.barcode(),
            bank_code: self.bank_code(),
            bank: self.bank().to_string(),
            currency: currency.code().to_string(),
            currency_symbol: currency.symbol().map(str::to_string),
            due_date: self.due_date(),
            amount: self.amount(),
            pretty_amount: self.pretty_amount(),
        }
    }

    fn field(&self, field: Field) -> String {
        self.barcode()[field.range()].to_string()
    }

    /// Modulo 11 over the barcode without its check digit.
    fn expected_checksum(&self) -> Result<u8, BoletoError> {
        let mut digits = parse_digits(&self.barcode())?;
        digits.remove(CHECKSUM.start);
        modulo11_digit(&digits)
    }
}

impl FromStr for Boleto {
    type Err = BoletoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Boleto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_number())
    }
}

/// Derived values of a [`Boleto`], ready for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoletoSummary {
    pub number: String,
    pub pretty_number: String,
    pub barcode: String,
    pub bank_code: String,
    pub bank: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    pub due_date: NaiveDate,
    pub amount: String,
    pub pretty_amount: String,
}
