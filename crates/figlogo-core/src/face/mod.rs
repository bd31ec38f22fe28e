//! # Raster faces
//!
//! A face measures and draws plain multi-line text onto a canvas. Faces are
//! obtained by walking an ordered list of [`FaceSource`]s; each source either
//! produces a face or falls through to the next, and the built-in bitmap
//! face always succeeds, so face loading never fails an export.

mod bitmap;
mod outline;

pub use bitmap::BitmapFace;
pub use outline::OutlineFace;

use std::path::PathBuf;

use image::{Rgb, RgbImage};

/// Ink and line-box extent of laid-out text, in pixels, relative to the
/// layout origin. `left` and `top` go negative when glyphs overhang the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top).max(0) as u32
    }
}

/// Something that can measure and draw text
pub trait Face {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    /// Bounding box of `text` laid out from the origin
    fn measure(&self, text: &str) -> TextBounds;

    /// Draw `text` with its layout origin at (`x`, `y`)
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>);
}

/// Installed families tried before the system monospace, in order
pub const DEFAULT_MONOSPACE_FAMILIES: [&str; 6] = [
    "Courier New",
    "Courier",
    "DejaVu Sans Mono",
    "Liberation Mono",
    "Menlo",
    "Consolas",
];

/// Size and spacing shared by all sources
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceStyle {
    /// Outline face em size in pixels
    pub size_px: f32,
    /// Extra pixels between lines
    pub line_spacing: u32,
    /// Integer upscale for the bitmap face
    pub bitmap_scale: u32,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            size_px: 10.0,
            line_spacing: 4,
            bitmap_scale: 2,
        }
    }
}

/// One strategy for obtaining a face
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceSource {
    /// A TrueType/OpenType file on disk
    File(PathBuf),
    /// The first installed family out of a preference list, then the system monospace
    System { families: Vec<String> },
    /// The built-in 5x7 bitmap face
    Builtin,
}

impl FaceSource {
    pub fn load(&self, style: &FaceStyle) -> Option<Box<dyn Face>> {
        match self {
            Self::File(path) => {
                let data = match std::fs::read(path) {
                    Ok(data) => data,
                    Err(e) => {
                        tracing::debug!("Face file {} unavailable: {}", path.display(), e);
                        return None;
                    }
                };
                let face = OutlineFace::from_data(data, 0, style, path.display().to_string())?;
                Some(Box::new(face))
            }
            Self::System { families } => load_system_face(families, style),
            Self::Builtin => Some(Box::new(BitmapFace::new(
                style.bitmap_scale,
                style.line_spacing,
            ))),
        }
    }
}

fn load_system_face(families: &[String], style: &FaceStyle) -> Option<Box<dyn Face>> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let mut query_families: Vec<fontdb::Family<'_>> =
        families.iter().map(|name| fontdb::Family::Name(name.as_str())).collect();
    query_families.push(fontdb::Family::Monospace);
    let query = fontdb::Query {
        families: &query_families,
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };

    let id = db.query(&query)?;
    let label = db
        .face(id)
        .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| "system monospace".to_string());
    let face = db
        .with_face_data(id, |data, index| {
            OutlineFace::from_data(data.to_vec(), index, style, label.clone())
        })
        .flatten()?;
    Some(Box::new(face))
}

/// Ordered face sources, always ending in the built-in face
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLoader {
    sources: Vec<FaceSource>,
    style: FaceStyle,
}

impl FaceLoader {
    pub fn new(sources: Vec<FaceSource>, style: FaceStyle) -> Self {
        Self { sources, style }
    }

    /// Only the built-in bitmap face
    pub fn builtin(style: FaceStyle) -> Self {
        Self::new(vec![FaceSource::Builtin], style)
    }

    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    /// First face any source can provide
    pub fn load(&self) -> Box<dyn Face> {
        for source in &self.sources {
            if let Some(face) = source.load(&self.style) {
                tracing::debug!("Using face {}", face.describe());
                return face;
            }
        }
        tracing::warn!("No configured face available, using the built-in bitmap face");
        Box::new(BitmapFace::new(self.style.bitmap_scale, self.style.line_spacing))
    }
}
