//! ASCII art generation

use std::fmt;
use std::ops::Deref;

use crate::catalog::FontCatalog;
use crate::error::GenerationError;
use crate::figfont::display_width;
use crate::resolver::FontName;

/// Rendered ASCII art with `\n` line breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoText(String);

impl LogoText {
    /// Wrap `text`, normalizing `\r\n` and lone `\r` to `\n`
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.contains('\r') {
            Self(text.replace("\r\n", "\n").replace('\r', "\n"))
        } else {
            Self(text)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn line_count(&self) -> usize {
        self.0.split('\n').count()
    }

    /// Display columns of the widest line
    pub fn columns(&self) -> usize {
        display_width(&self.0)
    }
}

impl Deref for LogoText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LogoText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces [`LogoText`] through a font catalog
pub struct ArtGenerator<'a, C: FontCatalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: FontCatalog + ?Sized> ArtGenerator<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    pub fn generate(&self, text: &str, font: &FontName) -> Result<LogoText, GenerationError> {
        if text.is_empty() {
            return Err(GenerationError::EmptyInput);
        }
        let rendered = self.catalog.render(text, font.as_str())?;
        let logo = LogoText::new(rendered);
        tracing::debug!(
            "Generated {}x{} logo with font '{}'",
            logo.columns(),
            logo.line_count(),
            font
        );
        Ok(logo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FigletCatalog, InMemoryCatalog};
    use crate::error::RenderError;
    use crate::resolver::FontResolver;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        let catalog = InMemoryCatalog::new(["standard"]);
        let font = FontResolver::new(&catalog).resolve("standard", false).unwrap();
        let generator = ArtGenerator::new(&catalog);
        assert_eq!(generator.generate("", &font), Err(GenerationError::EmptyInput));
    }

    #[test]
    fn test_line_endings_normalized() {
        let catalog = InMemoryCatalog::new(["standard"]);
        let font = FontResolver::new(&catalog).resolve("standard", false).unwrap();
        let logo = ArtGenerator::new(&catalog).generate("a\nb", &font).unwrap();
        assert_eq!(logo.as_str(), "[standard] a\n[standard] b");
        assert!(!logo.contains('\r'));
    }

    #[test]
    fn test_rendering_failure_surfaces() {
        let resolved_from = InMemoryCatalog::new(["gone"]);
        let font = FontResolver::new(&resolved_from).resolve("gone", false).unwrap();
        let catalog = InMemoryCatalog::new(["standard"]);
        assert_eq!(
            ArtGenerator::new(&catalog).generate("hi", &font),
            Err(GenerationError::RenderingFailed(RenderError::UnknownFont(
                "gone".to_string()
            )))
        );
    }

    #[test]
    fn test_line_count_lower_bound_and_determinism() {
        let catalog = FigletCatalog::bundled().unwrap();
        let generator = ArtGenerator::new(&catalog);
        let resolver = FontResolver::new(&catalog);
        for name in catalog.available_fonts() {
            let font = resolver.resolve(&name, false).unwrap();
            for text in ["HI", "a\nb", "x\n\ny", "Hello, World!"] {
                let first = generator.generate(text, &font).unwrap();
                let second = generator.generate(text, &font).unwrap();
                assert!(first.line_count() >= text.matches('\n').count() + 1);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_logo_text_metrics() {
        let logo = LogoText::new("ab\r\nabcd\rx");
        assert_eq!(logo.as_str(), "ab\nabcd\nx");
        assert_eq!(logo.line_count(), 3);
        assert_eq!(logo.columns(), 4);
    }
}
