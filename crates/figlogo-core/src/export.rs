//! # Image export
//!
//! Rasterizes ASCII art onto a canvas sized from the measured text and
//! writes it to disk in the format implied by the file extension.
//!
//! ```text
//!  ┌──────────────────────────────┐
//!  │          padding             │
//!  │   ┌──────────────────────┐   │
//!  │   │  measured text bbox  │   │
//!  │   └──────────────────────┘   │
//!  │                              │
//!  └──────────────────────────────┘
//! ```

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::error::{LimitError, LimitErrorKind};
use image::{ImageError, ImageFormat, Rgb, RgbImage};
use tempfile::NamedTempFile;

use crate::error::ExportError;
use crate::face::{FaceLoader, FaceSource, FaceStyle, TextBounds, DEFAULT_MONOSPACE_FAMILIES};

/// Largest canvas side we are willing to allocate
const MAX_CANVAS_SIDE: u32 = 16_384;

/// Rasterization settings
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Margin on all four sides, in pixels
    pub padding: u32,
    pub foreground: Rgb<u8>,
    pub background: Rgb<u8>,
    pub faces: FaceLoader,
}

impl ExportSettings {
    /// Defaults that never touch system fonts
    pub fn bitmap_only() -> Self {
        Self {
            faces: FaceLoader::builtin(FaceStyle::default()),
            ..Self::default()
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            padding: 20,
            foreground: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
            faces: FaceLoader::new(
                vec![
                    FaceSource::System {
                        families: DEFAULT_MONOSPACE_FAMILIES
                            .iter()
                            .map(|f| f.to_string())
                            .collect(),
                    },
                    FaceSource::Builtin,
                ],
                FaceStyle::default(),
            ),
        }
    }
}

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub face: String,
}

/// Renders logos to image files
#[derive(Debug, Clone)]
pub struct ImageExporter {
    settings: ExportSettings,
}

impl ImageExporter {
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }

    /// Canvas dimensions for measured text: the bbox plus padding on every side
    pub fn canvas_size(&self, bounds: &TextBounds) -> (u32, u32) {
        let padding = self.settings.padding.saturating_mul(2);
        (
            bounds.width().saturating_add(padding),
            bounds.height().saturating_add(padding),
        )
    }

    /// Measure, draw and encode `logo` in memory
    pub fn rasterize(&self, logo: &str) -> Result<(RgbImage, String), ExportError> {
        if logo.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let face = self.settings.faces.load();
        let bounds = face.measure(logo);
        let (width, height) = self.canvas_size(&bounds);
        if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(ExportError::EncodingFailed(ImageError::Limits(
                LimitError::from_kind(LimitErrorKind::DimensionError),
            )));
        }
        tracing::debug!(
            "Measured {:?} with {}, canvas {}x{}",
            bounds,
            face.describe(),
            width,
            height
        );

        let mut canvas = RgbImage::from_pixel(width, height, self.settings.background);
        let padding = self.settings.padding as i32;
        face.draw(
            &mut canvas,
            padding - bounds.left,
            padding - bounds.top,
            logo,
            self.settings.foreground,
        );
        Ok((canvas, face.describe()))
    }

    /// Export `logo` to `destination`, replacing any existing file.
    ///
    /// A destination without an extension gets `.png`. The image is written
    /// to a temporary file next to the destination and renamed into place,
    /// so a failed export leaves no partial file behind.
    pub fn export(
        &self,
        logo: impl AsRef<str>,
        destination: &Path,
    ) -> Result<ExportReport, ExportError> {
        let logo = logo.as_ref();
        if logo.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let path = with_default_extension(destination);
        let format = ImageFormat::from_path(&path)?;
        let (canvas, face) = self.rasterize(logo)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = stage_in(dir, &path).map_err(ExportError::WriteFailed)?;
        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            canvas.write_to(&mut writer, format)?;
            writer.flush().map_err(ExportError::WriteFailed)?;
        }
        staged
            .persist(&path)
            .map_err(|e| ExportError::WriteFailed(e.error))?;

        tracing::info!(
            "Saved {}x{} logo to {}",
            canvas.width(),
            canvas.height(),
            path.display()
        );
        Ok(ExportReport {
            path,
            format,
            width: canvas.width(),
            height: canvas.height(),
            face,
        })
    }
}

/// Temporary file in `dir` that will replace `target`. New files get the
/// usual 0o666 less the umask; a replaced file keeps its permissions.
fn stage_in(dir: &Path, target: &Path) -> std::io::Result<NamedTempFile> {
    let existing = std::fs::metadata(target).ok().map(|meta| meta.permissions());
    let mut builder = tempfile::Builder::new();
    builder.prefix(".figlogo-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let staged = builder.tempfile_in(dir)?;
    if let Some(permissions) = existing {
        std::fs::set_permissions(staged.path(), permissions)?;
    }
    Ok(staged)
}

/// `logo` becomes `logo.png`; paths with any extension are kept as they are
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("png")
    }
}
