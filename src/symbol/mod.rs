//! # Barcode Symbols
//!
//! Collaborators that turn a barcode's digits into a printable symbol.
//!
//! ## Architecture
//!
//! ```text
//! "3419679..." → SymbolEncoder → [Stripe] → SymbolRenderer → target
//!                 (ItfEncoder)               (SurfaceRenderer, PngFileRenderer)
//! ```
//!
//! The parsing core only depends on the two traits and [`Stripe`]; the
//! `barcoders` and `image` backed implementations live in the submodules.
//!
//! ## Example
//!
//! ```
//! use boleto::Boleto;
//! use boleto::symbol::{ItfEncoder, SurfaceRenderer, SymbolConfig};
//!
//! let boleto = Boleto::new("34191.09008 87379.487108 00106.511017 6 79120000010651")?;
//!
//! let mut renderer = SurfaceRenderer::new(SymbolConfig::STANDARD);
//! renderer.add_surface("slip");
//! boleto.render_symbol(&ItfEncoder, &mut renderer, "slip")?;
//!
//! let png = renderer.png("slip")?;
//! assert!(!png.is_empty());
//! # Ok::<(), boleto::BoletoError>(())
//! ```

pub mod config;
pub mod itf;
pub mod raster;

pub use config::SymbolConfig;
pub use itf::ItfEncoder;
pub use raster::{PngFileRenderer, SurfaceRenderer};

use serde::Serialize;
use thiserror::Error;

/// Errors raised by symbol encoders and renderers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// The digits cannot be encoded as a symbol
    #[error("Invalid symbol input: {0}")]
    InvalidSymbolInput(String),

    /// The render target could not be resolved
    #[error("Render target error: {0}")]
    RenderTarget(String),

    /// Image encoding or drawing failed
    #[error("Image error: {0}")]
    Image(String),
}

/// Whether a stripe is inked or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StripeColor {
    Bar,
    Space,
}

/// One bar or space of a linear symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Stripe {
    pub color: StripeColor,
    /// Width in modules (1 = narrow)
    pub width: u8,
}

impl Stripe {
    pub const fn bar(width: u8) -> Self {
        Self {
            color: StripeColor::Bar,
            width,
        }
    }

    pub const fn space(width: u8) -> Self {
        Self {
            color: StripeColor::Space,
            width,
        }
    }

    #[inline]
    pub fn is_bar(&self) -> bool {
        self.color == StripeColor::Bar
    }

    #[inline]
    pub fn is_wide(&self) -> bool {
        self.width > 1
    }
}

/// Converts a digit string into an ordered stripe sequence.
///
/// Implementations must be deterministic: the same digits always yield the
/// same stripes.
pub trait SymbolEncoder {
    fn encode(&self, digits: &str) -> Result<Vec<Stripe>, SymbolError>;
}

/// Draws a stripe sequence onto a target surface.
pub trait SymbolRenderer {
    /// How callers refer to the surface being drawn on.
    type Target: ?Sized;

    fn render(&mut self, stripes: &[Stripe], target: &Self::Target) -> Result<(), SymbolError>;
}

/// Total width of a stripe sequence in modules.
pub fn total_modules(stripes: &[Stripe]) -> u32 {
    stripes.iter().map(|s| s.width as u32).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripe_helpers() {
        let bar = Stripe::bar(3);
        assert!(bar.is_bar());
        assert!(bar.is_wide());

        let space = Stripe::space(1);
        assert!(!space.is_bar());
        assert!(!space.is_wide());
    }

    #[test]
    fn test_total_modules() {
        let stripes = [Stripe::bar(1), Stripe::space(3), Stripe::bar(1)];
        assert_eq!(total_modules(&stripes), 5);
        assert_eq!(total_modules(&[]), 0);
    }

    #[test]
    fn test_stripe_serializes_lowercase() {
        let json = serde_json::to_string(&Stripe::bar(1)).unwrap();
        assert_eq!(json, r#"{"color":"bar","width":1}"#);
    }
}
