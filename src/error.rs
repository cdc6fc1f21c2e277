//! # Error Types
//!
//! This module defines error types used throughout the boleto library.

use thiserror::Error;

use crate::symbol::SymbolError;

/// Main error type for boleto operations
#[derive(Debug, Error)]
pub enum BoletoError {
    /// The number is not 47 digits long or its barcode checksum does not match
    #[error("Invalid bank slip number: {0}")]
    InvalidBankSlipNumber(String),

    /// A field transform or checksum was called with malformed digits
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Symbol encoding or rendering failed
    #[error("Symbol error: {0}")]
    Symbol(#[from] SymbolError),

    /// Server-level errors (bind, accept)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
