//! # Boleto - Brazilian Bank Slip Library
//!
//! Boleto parses, validates and renders the 47-digit numbers printed on
//! Brazilian bank slips. It provides:
//!
//! - **Validation**: modulo-11 barcode checksum, all-or-nothing construction
//! - **Field transforms**: printed number ⇄ 44-digit barcode, masked layout
//! - **Derived values**: bank, currency, due date and amount
//! - **Symbols**: Interleaved 2 of 5 encoding and PNG rendering
//! - **Server**: a small JSON/PNG HTTP API
//!
//! ## Quick Start
//!
//! ```
//! use boleto::Boleto;
//!
//! let boleto = Boleto::new("00190.00009 02796.128300 00000.000174 4 10000000123456")?;
//!
//! assert_eq!(boleto.bank(), "Banco do Brasil");
//! assert_eq!(boleto.barcode(), "00194100000001234560000002796128300000000017");
//! assert_eq!(boleto.pretty_amount(), "R$ 1234,56");
//! # Ok::<(), boleto::BoletoError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`checksum`] | Modulo-11 and modulo-10 check digits |
//! | [`fields`] | Fixed-position layouts and field table |
//! | [`boleto`] | The validated bank slip record |
//! | [`bank`] | Bank name lookup |
//! | [`currency`] | Currency digit |
//! | [`batch`] | Parallel validation |
//! | [`symbol`] | Barcode encoding and rendering |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod bank;
pub mod batch;
pub mod boleto;
pub mod checksum;
pub mod currency;
pub mod error;
pub mod fields;
pub mod logging;
pub mod server;
pub mod symbol;

// Re-exports for convenience
pub use boleto::{Boleto, BoletoSummary};
pub use currency::Currency;
pub use error::BoletoError;
