//! Font catalogs
//!
//! A catalog is the glyph-rendering collaborator: it knows which fonts are
//! available and turns text into ASCII art with one of them.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::figfont::{FigFont, FigFontError};

/// Fonts compiled into the binary, keyed by name
pub const BUNDLED_FONTS: [(&str, &str); 12] = [
    ("standard", include_str!("../fonts/standard.flf")),
    ("small", include_str!("../fonts/small.flf")),
    ("slant", include_str!("../fonts/slant.flf")),
    ("big", include_str!("../fonts/big.flf")),
    ("doom", include_str!("../fonts/doom.flf")),
    ("lean", include_str!("../fonts/lean.flf")),
    ("banner", include_str!("../fonts/banner.flf")),
    ("mini", include_str!("../fonts/mini.flf")),
    ("digital", include_str!("../fonts/digital.flf")),
    ("block", include_str!("../fonts/block.flf")),
    ("shadow", include_str!("../fonts/shadow.flf")),
    ("thick", include_str!("../fonts/thick.flf")),
];

/// Source of named fonts and their renderings
pub trait FontCatalog {
    /// Names of every font that can be rendered, sorted
    fn available_fonts(&self) -> Vec<String>;

    /// Render `text` with the named font
    fn render(&self, text: &str, font: &str) -> Result<String, RenderError>;

    fn contains(&self, font: &str) -> bool {
        self.available_fonts().iter().any(|name| name == font)
    }
}

/// Catalog of parsed FIGfonts: the bundled set plus any user font directories
#[derive(Debug, Clone, Default)]
pub struct FigletCatalog {
    fonts: BTreeMap<String, FigFont>,
}

impl FigletCatalog {
    /// Catalog with no fonts at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog holding the bundled fonts
    pub fn bundled() -> Result<Self, FigFontError> {
        let mut catalog = Self::empty();
        for (name, source) in BUNDLED_FONTS {
            catalog.insert(name, FigFont::parse(source)?);
        }
        Ok(catalog)
    }

    /// Bundled fonts followed by every `*.flf` file in `dirs`.
    /// User fonts replace bundled ones of the same name; unreadable fonts are skipped.
    pub fn with_font_dirs<P: AsRef<Path>>(dirs: &[P]) -> Result<Self, FigFontError> {
        let mut catalog = Self::bundled()?;
        for dir in dirs {
            catalog.load_dir(dir.as_ref());
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, name: impl Into<String>, font: FigFont) {
        self.fonts.insert(name.into(), font);
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Load every `*.flf` in `dir`, returning how many fonts were added
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Cannot read font directory {}: {}", dir.display(), e);
                return 0;
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "flf"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|source| FigFont::parse(&source).map_err(|e| e.to_string()));
            match parsed {
                Ok(font) => {
                    tracing::debug!("Loaded font '{}' from {}", name, path.display());
                    self.insert(name, font);
                    loaded += 1;
                }
                Err(e) => tracing::warn!("Skipping font {}: {}", path.display(), e),
            }
        }
        loaded
    }
}

impl FontCatalog for FigletCatalog {
    fn available_fonts(&self) -> Vec<String> {
        self.fonts.keys().cloned().collect()
    }

    fn render(&self, text: &str, font: &str) -> Result<String, RenderError> {
        self.fonts
            .get(font)
            .map(|figfont| figfont.render(text))
            .ok_or_else(|| RenderError::UnknownFont(font.to_string()))
    }

    fn contains(&self, font: &str) -> bool {
        self.fonts.contains_key(font)
    }
}

/// Catalog backed by a fixed set of names; renders text as one row per
/// input line, each prefixed with the font name. Useful in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    fonts: BTreeSet<String>,
}

impl InMemoryCatalog {
    pub fn new<I, S>(fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fonts: fonts.into_iter().map(Into::into).collect(),
        }
    }
}

impl FontCatalog for InMemoryCatalog {
    fn available_fonts(&self) -> Vec<String> {
        self.fonts.iter().cloned().collect()
    }

    fn render(&self, text: &str, font: &str) -> Result<String, RenderError> {
        if !self.fonts.contains(font) {
            return Err(RenderError::UnknownFont(font.to_string()));
        }
        Ok(text
            .split('\n')
            .map(|line| format!("[{font}] {line}"))
            .collect::<Vec<_>>()
            .join("\r\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figfont::tests::diagonal_font;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bundled_fonts_parse() {
        let catalog = FigletCatalog::bundled().unwrap();
        assert_eq!(catalog.len(), BUNDLED_FONTS.len());
        for (name, _) in BUNDLED_FONTS {
            assert!(catalog.contains(name), "missing {name}");
            let rendered = catalog.render("AB", name).unwrap();
            assert!(
                rendered.lines().any(|line| !line.trim().is_empty()),
                "{name} rendered nothing"
            );
        }
    }

    #[test]
    fn test_standard_hi() {
        let catalog = FigletCatalog::bundled().unwrap();
        let rendered = catalog.render("HI", "standard").unwrap();
        let expected = [
            r" _   _ ___ ",
            r"| | | |_ _|",
            r"| |_| || | ",
            r"|  _  || | ",
            r"|_| |_|___|",
            r"           ",
        ]
        .join("\n");
        assert_eq!(rendered, expected);

        let rendered = catalog.render("Hello", "standard").unwrap();
        assert_eq!(rendered.lines().nth(4), Some(r"|_| |_|_____|_____|_____\___/ "));
    }

    #[test]
    fn test_available_fonts_sorted() {
        let catalog = FigletCatalog::bundled().unwrap();
        let fonts = catalog.available_fonts();
        let mut sorted = fonts.clone();
        sorted.sort();
        assert_eq!(fonts, sorted);
    }

    #[test]
    fn test_unknown_font() {
        let catalog = FigletCatalog::bundled().unwrap();
        assert_eq!(
            catalog.render("x", "nope"),
            Err(RenderError::UnknownFont("nope".to_string()))
        );
    }

    #[test]
    fn test_font_dir_overrides_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("diagonal.flf"), diagonal_font(-1)).unwrap();
        std::fs::write(dir.path().join("standard.flf"), diagonal_font(0)).unwrap();
        std::fs::write(dir.path().join("broken.flf"), "not a font").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalog = FigletCatalog::with_font_dirs(&[dir.path()]).unwrap();
        assert!(catalog.contains("diagonal"));
        assert!(!catalog.contains("broken"));
        assert!(!catalog.contains("notes"));
        assert_eq!(catalog.len(), BUNDLED_FONTS.len() + 1);
        assert_eq!(catalog.render("AB", "standard").unwrap(), "AB \n AB");
    }

    #[test]
    fn test_missing_font_dir_is_not_fatal() {
        let mut catalog = FigletCatalog::empty();
        assert_eq!(catalog.load_dir(Path::new("/definitely/not/here")), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_in_memory_catalog() {
        let catalog = InMemoryCatalog::new(["alpha", "beta"]);
        assert_eq!(catalog.available_fonts(), vec!["alpha", "beta"]);
        assert!(catalog.contains("beta"));
        assert_eq!(catalog.render("a\nb", "alpha").unwrap(), "[alpha] a\r\n[alpha] b");
        assert!(catalog.render("a", "gamma").is_err());
    }
}
