use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::CatalogSettings;
use crate::controller::GallerySettings;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "KINDFRAME_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of photos in the collection.
    #[serde(default = "default_catalog_size")]
    pub size: usize,

    #[serde(default = "default_base_year")]
    pub base_year: u32,

    /// Consecutive photos sharing one year label.
    #[serde(default = "default_band_size")]
    pub band_size: usize,

    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,

    #[serde(default = "default_asset_dir")]
    pub asset_dir: String,

    #[serde(default = "default_asset_extension")]
    pub asset_extension: String,
}

fn default_catalog_size() -> usize {
    53
}

fn default_base_year() -> u32 {
    2025
}

fn default_band_size() -> usize {
    25
}

fn default_title_prefix() -> String {
    "kind frame ".to_string()
}

fn default_asset_dir() -> String {
    "/images".to_string()
}

fn default_asset_extension() -> String {
    "jpeg".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            size: default_catalog_size(),
            base_year: default_base_year(),
            band_size: default_band_size(),
            title_prefix: default_title_prefix(),
            asset_dir: default_asset_dir(),
            asset_extension: default_asset_extension(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Thumbnails on each side of the current photo in the lightbox strip.
    #[serde(default = "default_neighborhood_radius")]
    pub neighborhood_radius: usize,

    /// Delay before the entrance transition completes.
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

fn default_page_size() -> usize {
    16
}

fn default_neighborhood_radius() -> usize {
    2
}

fn default_load_delay_ms() -> u64 {
    300
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            neighborhood_radius: default_neighborhood_radius(),
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Allow `v` to switch between the grid and slider layouts.
    #[serde(default)]
    pub slider_toggle: bool,

    /// Columns in the grid layout.
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u16,

    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_grid_columns() -> u16 {
    4
}

fn default_tick_rate_ms() -> u64 {
    50
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            slider_toggle: false,
            grid_columns: default_grid_columns(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kindframe")
    }

    fn config_path() -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::config_dir().join("config.toml"),
        }
    }

    /// Settings for the gallery core.
    pub fn settings(&self) -> GallerySettings {
        GallerySettings {
            catalog: CatalogSettings {
                size: self.catalog.size,
                base_year: self.catalog.base_year,
                band_size: self.catalog.band_size.max(1),
                title_prefix: self.catalog.title_prefix.clone(),
                asset_dir: self.catalog.asset_dir.clone(),
                asset_extension: self.catalog.asset_extension.clone(),
            },
            page_size: self.gallery.page_size,
            neighborhood_radius: self.gallery.neighborhood_radius,
            load_delay: Duration::from_millis(self.gallery.load_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_gallery_defaults() {
        assert_eq!(Config::default().settings(), GallerySettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [gallery]
            page_size = 4

            [ui]
            slider_toggle = true
            "#,
        )
        .unwrap();

        assert_eq!(config.gallery.page_size, 4);
        assert_eq!(config.gallery.neighborhood_radius, 2);
        assert!(config.ui.slider_toggle);
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.catalog.size = 7;
        config.gallery.load_delay_ms = 0;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gallery]\npage_size = \"lots\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_zero_band_size_is_normalised() {
        let mut config = Config::default();
        config.catalog.band_size = 0;
        assert_eq!(config.settings().catalog.band_size, 1);
    }
}
