//! # FigLogo Configuration
//!
//! Rendering and export settings.
//!
//! Configuration sources (in priority order):
//! 1. Environment variables (`FIGLOGO_EXPORT__PADDING=32`)
//! 2. User config (~/.config/figlogo/config.toml, or `--config PATH`)
//! 3. Built-in defaults

use directories::ProjectDirs;
use figlogo_core::{
    ExportSettings, FaceLoader, FaceSource, FaceStyle, Rgb, DEFAULT_MONOSPACE_FAMILIES,
};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "figlogo", "FigLogo")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/figlogo"))
}

/// Invalid setting values
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid color '{value}' for {field}: {source}")]
    InvalidColor {
        field: &'static str,
        value: String,
        #[source]
        source: csscolorparser::ParseColorError,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ASCII art rendering
    pub render: RenderConfig,
    /// Image export
    pub export: ExportConfig,
}

/// ASCII art rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Font used when none is given on the command line
    pub default_font: String,
    /// Extra directories scanned for `.flf` fonts
    pub font_dirs: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_font: "standard".to_string(),
            font_dirs: Vec::new(),
        }
    }
}

/// Image export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Margin around the text in pixels
    pub padding: u32,
    /// Outline face em size in pixels
    pub face_size: f32,
    /// Extra pixels between lines
    pub line_spacing: u32,
    /// Font files tried before any system font
    pub face_paths: Vec<PathBuf>,
    /// Preferred installed families, in order
    pub monospace_families: Vec<String>,
    /// Look up installed fonts at all
    pub use_system_fonts: bool,
    /// Upscale factor for the built-in bitmap face
    pub bitmap_scale: u32,
    /// Text color (any CSS color)
    pub foreground: String,
    /// Canvas color (any CSS color)
    pub background: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            padding: 20,
            face_size: 10.0,
            line_spacing: 4,
            face_paths: Vec::new(),
            monospace_families: DEFAULT_MONOSPACE_FAMILIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            use_system_fonts: true,
            bitmap_scale: 2,
            foreground: "black".to_string(),
            background: "white".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn foreground_rgb(&self) -> Result<Rgb<u8>, ConfigError> {
        parse_color("export.foreground", &self.foreground)
    }

    pub fn background_rgb(&self) -> Result<Rgb<u8>, ConfigError> {
        parse_color("export.background", &self.background)
    }

    pub fn face_style(&self) -> FaceStyle {
        FaceStyle {
            size_px: self.face_size,
            line_spacing: self.line_spacing,
            bitmap_scale: self.bitmap_scale,
        }
    }

    /// Face files first, then installed fonts, then the built-in bitmap face
    pub fn face_sources(&self) -> Vec<FaceSource> {
        let mut sources: Vec<FaceSource> = self
            .face_paths
            .iter()
            .cloned()
            .map(FaceSource::File)
            .collect();
        if self.use_system_fonts {
            sources.push(FaceSource::System {
                families: self.monospace_families.clone(),
            });
        }
        sources.push(FaceSource::Builtin);
        sources
    }

    pub fn to_export_settings(&self) -> Result<ExportSettings, ConfigError> {
        Ok(ExportSettings {
            padding: self.padding,
            foreground: self.foreground_rgb()?,
            background: self.background_rgb()?,
            faces: FaceLoader::new(self.face_sources(), self.face_style()),
        })
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Rgb<u8>, ConfigError> {
    let color = csscolorparser::parse(value).map_err(|source| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
        source,
    })?;
    let [r, g, b, _] = color.to_rgba8();
    Ok(Rgb([r, g, b]))
}

/// Loads and saves the configuration file
pub struct ConfigManager {
    config: Config,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config_dir().join("config.toml"));

        let config = Self::load_from_file(&config_path)?;
        tracing::debug!("Loaded configuration from {}", config_path.display());

        Ok(Self {
            config,
            config_path,
        })
    }

    fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("FIGLOGO_").split("__"));

        Ok(figment.extract()?)
    }

    /// Get current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(&self.config)?;

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.config_path, content)?;
        tracing::info!("Wrote configuration to {}", self.config_path.display());
        Ok(())
    }
}
