//! # Symbol Configuration
//!
//! Physical geometry of a rendered bank slip symbol.
//!
//! ## Profiles
//!
//! | Profile | Resolution | Narrow module | Bar height | Quiet zone |
//! |---------|------------|---------------|------------|------------|
//! | standard | 203 DPI | 2 dots (0.25mm) | 13mm | 10 modules |
//! | compact | 203 DPI | 1 dot | 8mm | 10 modules |
//!
//! ## Usage
//!
//! ```
//! use boleto::symbol::SymbolConfig;
//!
//! let config = SymbolConfig::STANDARD;
//! println!("Bars are {} dots tall", config.bar_height_dots());
//! ```

use super::{Stripe, total_modules};

/// # Symbol Configuration
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
/// bar_height  = bar_height_mm * dots_per_mm
/// width       = (modules + 2 * quiet_zone_modules) * module_width
///
/// For STANDARD:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   bar_height  = 13 * 8 ≈ 104 dots
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolConfig {
    /// Profile name
    pub name: &'static str,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Width of one narrow module in dots
    pub module_width: u32,

    /// Height of the bars in millimeters
    pub bar_height_mm: f32,

    /// Blank modules on each side of the symbol
    pub quiet_zone_modules: u32,

    /// Dots between the bars and the caption
    pub caption_gap: u32,
}

impl SymbolConfig {
    pub const STANDARD: Self = Self {
        name: "standard",
        dpi: 203,
        module_width: 2,
        bar_height_mm: 13.0,
        quiet_zone_modules: 10,
        caption_gap: 8,
    };

    pub const COMPACT: Self = Self {
        name: "compact",
        dpi: 203,
        module_width: 1,
        bar_height_mm: 8.0,
        quiet_zone_modules: 10,
        caption_gap: 4,
    };

    const ALL: [Self; 2] = [Self::STANDARD, Self::COMPACT];

    /// Look up a profile by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Names of all profiles.
    pub fn list() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name).collect()
    }

    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    #[inline]
    pub fn mm_to_dots(&self, mm: f32) -> u32 {
        (mm * self.dots_per_mm()).round() as u32
    }

    #[inline]
    pub fn bar_height_dots(&self) -> u32 {
        self.mm_to_dots(self.bar_height_mm).max(1)
    }

    /// Width in dots of a symbol, quiet zones included.
    pub fn symbol_width(&self, stripes: &[Stripe]) -> u32 {
        (total_modules(stripes) + 2 * self.quiet_zone_modules) * self.module_width
    }
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bar_height() {
        let config = SymbolConfig::STANDARD;
        assert!((config.dots_per_mm() - 8.0).abs() < 0.1);
        assert_eq!(config.bar_height_dots(), 104);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(SymbolConfig::by_name("compact"), Some(SymbolConfig::COMPACT));
        assert_eq!(SymbolConfig::by_name("STANDARD"), Some(SymbolConfig::STANDARD));
        assert_eq!(SymbolConfig::by_name("huge"), None);
        assert_eq!(SymbolConfig::list(), vec!["standard", "compact"]);
    }

    #[test]
    fn test_symbol_width_includes_quiet_zones() {
        let stripes = [Stripe::bar(1), Stripe::space(3), Stripe::bar(1)];
        assert_eq!(SymbolConfig::STANDARD.symbol_width(&stripes), (5 + 20) * 2);
        assert_eq!(SymbolConfig::COMPACT.symbol_width(&stripes), 25);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(SymbolConfig::default(), SymbolConfig::STANDARD);
    }
}
