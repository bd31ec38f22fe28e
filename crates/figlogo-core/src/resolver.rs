//! Font name resolution
//!
//! Turns what the user asked for (a name, or "surprise me") into a
//! [`FontName`] known to be in the catalog.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::FontCatalog;
use crate::error::FontError;

/// A font name confirmed to be in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontName(String);

impl FontName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FontName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates or randomly picks font names against a catalog
pub struct FontResolver<'a, C: FontCatalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: FontCatalog + ?Sized> FontResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Resolve using the thread-local RNG
    pub fn resolve(&self, requested: &str, use_random: bool) -> Result<FontName, FontError> {
        self.resolve_with_rng(requested, use_random, &mut rand::rng())
    }

    /// Resolve drawing any random choice from `rng`
    pub fn resolve_with_rng<R: Rng + ?Sized>(
        &self,
        requested: &str,
        use_random: bool,
        rng: &mut R,
    ) -> Result<FontName, FontError> {
        if use_random {
            let fonts = self.catalog.available_fonts();
            let font = fonts.choose(rng).ok_or(FontError::NoFontsAvailable)?;
            tracing::debug!("Picked random font '{}' out of {}", font, fonts.len());
            return Ok(FontName(font.clone()));
        }

        if requested.is_empty() {
            return Err(FontError::MissingName);
        }
        if !self.catalog.contains(requested) {
            return Err(FontError::UnknownFont(requested.to_string()));
        }
        Ok(FontName(requested.to_string()))
    }
}
