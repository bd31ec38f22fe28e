//! # FigLogo Core
//!
//! Turns text into FIGlet-style ASCII art logos.
//!
//! This crate provides:
//! - A FIGfont (`.flf`) parser and renderer with a bundled font set
//! - Font name validation and random font selection
//! - ASCII art generation against any [`FontCatalog`]
//! - A render session holding the current logo and its font
//! - PNG (and other raster format) export with measured canvas sizing
//!
//! ```text
//!   _____ _       _
//!  |  ___(_) __ _| |    ___   __ _  ___
//!  | |_  | |/ _` | |   / _ \ / _` |/ _ \
//!  |  _| | | (_| | |__| (_) | (_| | (_) |
//!  |_|   |_|\__, |_____\___/ \__, |\___/
//!           |___/            |___/
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod face;
pub mod figfont;
pub mod generator;
pub mod resolver;
pub mod session;

pub use catalog::{FigletCatalog, FontCatalog, InMemoryCatalog, BUNDLED_FONTS};
pub use error::{
    CopyError, CoreError, ExportError, FontError, GenerationError, RenderError, Result,
};
pub use export::{ExportReport, ExportSettings, ImageExporter};
pub use face::{
    BitmapFace, Face, FaceLoader, FaceSource, FaceStyle, OutlineFace, TextBounds,
    DEFAULT_MONOSPACE_FAMILIES,
};
pub use figfont::{FigFont, FigFontError, Layout, PrintDirection};
pub use generator::{ArtGenerator, LogoText};
pub use resolver::{FontName, FontResolver};
pub use session::{RenderSession, Rendering};

pub use image::Rgb;

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load the bundled fonts plus any `.flf` files found in `font_dirs`
pub fn init<P: AsRef<std::path::Path>>(font_dirs: &[P]) -> Result<FigletCatalog> {
    tracing::info!("Initializing FigLogo Core v{}", VERSION);
    let catalog = FigletCatalog::with_font_dirs(font_dirs)?;
    tracing::debug!("{} fonts available", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        let catalog = init::<&str>(&[]).unwrap();
        assert_eq!(catalog.len(), BUNDLED_FONTS.len());
    }
}
