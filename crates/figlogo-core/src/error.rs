//! Error types for FigLogo Core

use thiserror::Error;

/// Result type for FigLogo Core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Font name validation and selection failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// No font name given and random selection was not requested
    #[error("Please enter a font name or use a random font")]
    MissingName,

    /// The name is not in the catalog
    #[error("Font '{0}' not found!")]
    UnknownFont(String),

    /// Random selection from an empty catalog
    #[error("No fonts are available")]
    NoFontsAvailable,
}

/// Raised by a font catalog when it cannot render text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The catalog no longer knows the requested font
    #[error("font '{0}' is not loaded")]
    UnknownFont(String),
}

/// ASCII art generation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Nothing to render
    #[error("Please enter some text to generate a logo!")]
    EmptyInput,

    /// The glyph collaborator rejected the request
    #[error("Rendering failed: {0}")]
    RenderingFailed(#[from] RenderError),
}

/// Copy failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    #[error("There is no logo to copy!")]
    NothingToCopy,
}

/// Image export failures
#[derive(Error, Debug)]
pub enum ExportError {
    /// The session holds no logo
    #[error("Please generate a logo before saving!")]
    NothingToExport,

    /// Disk or permission failure
    #[error("Failed to write image: {0}")]
    WriteFailed(#[source] std::io::Error),

    /// The canvas could not be encoded in the requested format
    #[error("Failed to encode image: {0}")]
    EncodingFailed(#[source] image::ImageError),
}

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => Self::WriteFailed(io),
            other => Self::EncodingFailed(other),
        }
    }
}

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// Malformed FIGfont data
    #[error("Font parse error: {0}")]
    FigFont(#[from] crate::figfont::FigFontError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            FontError::UnknownFont("zzz".to_string()).to_string(),
            "Font 'zzz' not found!"
        );
        assert_eq!(
            GenerationError::EmptyInput.to_string(),
            "Please enter some text to generate a logo!"
        );
    }

    #[test]
    fn test_image_io_error_is_write_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ExportError::from(image::ImageError::IoError(io));
        assert!(matches!(err, ExportError::WriteFailed(_)));
    }

    #[test]
    fn test_core_error_wraps_taxonomy() {
        let err: CoreError = FontError::MissingName.into();
        assert!(matches!(err, CoreError::Font(FontError::MissingName)));
    }
}
