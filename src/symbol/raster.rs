//! # Raster Rendering
//!
//! Draws stripe sequences into grayscale images and encodes them as PNG.
//!
//! ## Layout
//!
//! ```text
//! ├ quiet ┼──────── stripes ────────┼ quiet ┤
//! │       ▌▌ ▌ ▌▌▌ ▌ ▌▌ ▌▌▌ ▌ ▌▌ ▌▌ │       │  bar_height
//! │                                          │  caption_gap
//! │   34191.09008 87379.487108 00106.5...    │  caption (Spleen 12x24)
//! ```
//!
//! The image is as wide as the symbol or the caption, whichever is wider,
//! and the symbol is centered horizontally.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use image::{GrayImage, Luma};
use spleen_font::{FONT_12X24, PSF2Font};
use tracing::debug;

use super::{Stripe, SymbolConfig, SymbolError, SymbolRenderer};

const GLYPH_WIDTH: u32 = 12;
const GLYPH_HEIGHT: u32 = 24;

const BLACK: u8 = 0;
const WHITE: u8 = 255;

/// Draw a symbol, optionally captioned, into a new image.
pub fn draw(
    stripes: &[Stripe],
    config: &SymbolConfig,
    caption: Option<&str>,
) -> Result<GrayImage, SymbolError> {
    if stripes.is_empty() {
        return Err(SymbolError::InvalidSymbolInput(
            "no stripes to draw".to_string(),
        ));
    }

    let bar_height = config.bar_height_dots();
    let symbol_width = config.symbol_width(stripes);
    let caption_width = caption.map_or(0, |text| text.chars().count() as u32 * GLYPH_WIDTH);

    let width = symbol_width.max(caption_width);
    let height = bar_height + caption.map_or(0, |_| config.caption_gap + GLYPH_HEIGHT);

    let mut img = GrayImage::from_pixel(width, height, Luma([WHITE]));

    let mut x = (width - symbol_width) / 2 + config.quiet_zone_modules * config.module_width;
    for stripe in stripes {
        let stripe_width = stripe.width as u32 * config.module_width;
        if stripe.is_bar() {
            for dx in 0..stripe_width {
                for y in 0..bar_height {
                    img.put_pixel(x + dx, y, Luma([BLACK]));
                }
            }
        }
        x += stripe_width;
    }

    if let Some(text) = caption {
        let text_x = (width - caption_width) / 2;
        draw_text(&mut img, text_x, bar_height + config.caption_gap, text)?;
    }

    Ok(img)
}

/// Draw a line of text with the Spleen 12x24 font.
fn draw_text(img: &mut GrayImage, x: u32, y: u32, text: &str) -> Result<(), SymbolError> {
    let mut font = PSF2Font::new(FONT_12X24)
        .map_err(|_| SymbolError::Image("failed to load caption font".to_string()))?;

    for (i, ch) in text.chars().enumerate() {
        let origin_x = x + i as u32 * GLYPH_WIDTH;
        let utf8 = ch.to_string();

        let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) else {
            continue;
        };
        for (row_y, row) in glyph.enumerate() {
            for (col_x, on) in row.enumerate() {
                let px = origin_x + col_x as u32;
                let py = y + row_y as u32;
                if on && px < img.width() && py < img.height() {
                    img.put_pixel(px, py, Luma([BLACK]));
                }
            }
        }
    }

    Ok(())
}

/// Encode a grayscale image as PNG bytes.
pub fn encode_png(img: &GrayImage) -> Result<Vec<u8>, SymbolError> {
    use image::ImageEncoder;

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::L8,
        )
        .map_err(|e: image::ImageError| SymbolError::Image(e.to_string()))?;

    Ok(png_bytes)
}

#[derive(Debug, Default)]
struct Surface {
    caption: Option<String>,
    image: Option<GrayImage>,
}

/// Renders onto named in-memory surfaces.
///
/// Surfaces must be registered before they can be drawn on; rendering to an
/// unknown name fails with [`SymbolError::RenderTarget`]. Each render
/// replaces the surface's previous image.
#[derive(Debug)]
pub struct SurfaceRenderer {
    config: SymbolConfig,
    surfaces: HashMap<String, Surface>,
}

impl SurfaceRenderer {
    pub fn new(config: SymbolConfig) -> Self {
        Self {
            config,
            surfaces: HashMap::new(),
        }
    }

    /// Register a surface without a caption.
    pub fn add_surface(&mut self, name: impl Into<String>) -> &mut Self {
        self.surfaces.insert(name.into(), Surface::default());
        self
    }

    /// Register a surface that prints `caption` under the bars.
    pub fn add_captioned_surface(
        &mut self,
        name: impl Into<String>,
        caption: impl Into<String>,
    ) -> &mut Self {
        self.surfaces.insert(
            name.into(),
            Surface {
                caption: Some(caption.into()),
                image: None,
            },
        );
        self
    }

    /// The last image drawn on a surface, if any.
    pub fn image(&self, name: &str) -> Option<&GrayImage> {
        self.surfaces.get(name).and_then(|s| s.image.as_ref())
    }

    /// PNG bytes of the last image drawn on a surface.
    pub fn png(&self, name: &str) -> Result<Vec<u8>, SymbolError> {
        let img = self.image(name).ok_or_else(|| {
            SymbolError::RenderTarget(format!("nothing has been rendered on '{}'", name))
        })?;
        encode_png(img)
    }
}

impl SymbolRenderer for SurfaceRenderer {
    type Target = str;

    fn render(&mut self, stripes: &[Stripe], target: &str) -> Result<(), SymbolError> {
        let surface = self
            .surfaces
            .get_mut(target)
            .ok_or_else(|| SymbolError::RenderTarget(format!("no surface named '{}'", target)))?;

        let img = draw(stripes, &self.config, surface.caption.as_deref())?;
        debug!(
            surface = target,
            width = img.width(),
            height = img.height(),
            "rendered symbol"
        );
        surface.image = Some(img);
        Ok(())
    }
}

/// Renders straight to a PNG file.
#[derive(Debug, Clone)]
pub struct PngFileRenderer {
    config: SymbolConfig,
    caption: Option<String>,
}

impl PngFileRenderer {
    pub fn new(config: SymbolConfig) -> Self {
        Self {
            config,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl SymbolRenderer for PngFileRenderer {
    type Target = Path;

    fn render(&mut self, stripes: &[Stripe], target: &Path) -> Result<(), SymbolError> {
        if let Some(dir) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !dir.is_dir() {
                return Err(SymbolError::RenderTarget(format!(
                    "directory {} does not exist",
                    dir.display()
                )));
            }
        }
        if target.is_dir() {
            return Err(SymbolError::RenderTarget(format!(
                "{} is a directory",
                target.display()
            )));
        }

        let img = draw(stripes, &self.config, self.caption.as_deref())?;
        let png = encode_png(&img)?;
        fs::write(target, png).map_err(|e| {
            SymbolError::RenderTarget(format!("failed to write {}: {}", target.display(), e))
        })?;

        debug!(path = %target.display(), "saved symbol PNG");
        Ok(())
    }
}
