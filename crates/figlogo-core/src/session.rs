//! Render session
//!
//! Holds the logo currently on display together with the font that produced
//! it. Both are stored as one [`Rendering`] so readers never see a logo
//! paired with the wrong font.

use crate::error::{CopyError, ExportError};
use crate::export::{ExportReport, ImageExporter};
use crate::generator::LogoText;
use crate::resolver::FontName;
use std::path::Path;

/// One successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub logo: LogoText,
    pub font: FontName,
}

/// The current rendering, if any
#[derive(Debug, Default)]
pub struct RenderSession {
    current: Option<Rendering>,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current rendering
    pub fn commit(&mut self, logo: LogoText, font: FontName) {
        tracing::debug!("Committing logo rendered with '{}'", font);
        self.current = Some(Rendering { logo, font });
    }

    pub fn current(&self) -> Option<&Rendering> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Text to hand to the clipboard
    pub fn copy_text(&self) -> Result<&str, CopyError> {
        self.current
            .as_ref()
            .map(|rendering| rendering.logo.as_str())
            .ok_or(CopyError::NothingToCopy)
    }

    /// Export the current logo
    pub fn export(
        &self,
        exporter: &ImageExporter,
        destination: &Path,
    ) -> Result<ExportReport, ExportError> {
        match &self.current {
            Some(rendering) => exporter.export(&rendering.logo, destination),
            None => Err(ExportError::NothingToExport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::export::ExportSettings;
    use crate::generator::ArtGenerator;
    use crate::resolver::FontResolver;

    #[test]
    fn test_empty_session() {
        let session = RenderSession::new();
        assert!(session.is_empty());
        assert_eq!(session.copy_text(), Err(CopyError::NothingToCopy));
    }

    #[test]
    fn test_commit_replaces_both_fields() {
        let catalog = InMemoryCatalog::new(["one", "two"]);
        let resolver = FontResolver::new(&catalog);
        let generator = ArtGenerator::new(&catalog);
        let mut session = RenderSession::new();

        let one = resolver.resolve("one", false).unwrap();
        session.commit(generator.generate("hi", &one).unwrap(), one);
        let two = resolver.resolve("two", false).unwrap();
        session.commit(generator.generate("yo", &two).unwrap(), two.clone());

        let current = session.current().unwrap();
        assert_eq!(current.font, two);
        assert_eq!(current.logo.as_str(), "[two] yo");
        assert_eq!(session.copy_text().unwrap(), "[two] yo");
    }

    #[test]
    fn test_failed_generation_keeps_previous_logo() {
        let catalog = InMemoryCatalog::new(["one"]);
        let font = FontResolver::new(&catalog).resolve("one", false).unwrap();
        let generator = ArtGenerator::new(&catalog);
        let mut session = RenderSession::new();
        session.commit(generator.generate("hi", &font).unwrap(), font.clone());

        if let Ok(logo) = generator.generate("", &font) {
            session.commit(logo, font);
        }
        assert_eq!(session.copy_text().unwrap(), "[one] hi");
    }

    #[test]
    fn test_export_empty_session_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.png");
        let exporter = ImageExporter::new(ExportSettings::bitmap_only());
        let result = RenderSession::new().export(&exporter, &path);
        assert!(matches!(result, Err(ExportError::NothingToExport)));
        assert!(!path.exists());
    }
}
