//! # Currency
//!
//! The currency digit of the barcode. Only `9` (Brazilian Real) is defined;
//! anything else is reported as unknown rather than rejected.

use std::fmt;

/// Currency identified by the barcode's currency digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Brazilian Real (digit `9`)
    Real,
    /// Any other digit
    Unknown,
}

impl Currency {
    /// Interpret the single currency digit.
    pub fn from_digit(digit: &str) -> Self {
        match digit {
            "9" => Self::Real,
            _ => Self::Unknown,
        }
    }

    /// ISO 4217 code, or `"Unknown"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Real => "BRL",
            Self::Unknown => "Unknown",
        }
    }

    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Real => Some("R$"),
            Self::Unknown => None,
        }
    }

    pub fn decimal_separator(&self) -> Option<char> {
        match self {
            Self::Real => Some(','),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
