use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swipe_gallery::GalleryConfig;

/// Default location of the config file, relative to the working directory
pub const CONFIG_FILE: &str = "gallery.toml";

/// Environment override for the per-gallery image cap
pub const MAX_IMAGES_ENV: &str = "GALLERY_MAX_IMAGES";

/// Host page configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Gallery behaviour and class names
    pub gallery: GalleryConfig,
    /// JSON page content; the built-in demo page is used when unset
    pub page: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.gallery.max_images == 0 {
            return Err(AppError::Validation(
                "max_images must be at least 1".to_string(),
            ));
        }
        if self.gallery.swipe_threshold <= 0.0 || self.gallery.dead_zone < 0.0 {
            return Err(AppError::Validation(
                "swipe_threshold must be positive and dead_zone non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply an override of the image cap
    pub fn apply_max_images_override(&mut self, value: &str) -> Result<(), AppError> {
        let max_images: usize = value.trim().parse().map_err(|_| {
            AppError::Validation(format!("{} must be a number, got {:?}", MAX_IMAGES_ENV, value))
        })?;
        self.gallery.max_images = max_images;
        self.validate()
    }
}

/// Load the config file if present, then apply environment overrides
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    let mut config = if path.exists() {
        log::info!("Loading config from {}", path.display());
        AppConfig::from_toml(&std::fs::read_to_string(path)?)?
    } else {
        log::debug!("No config at {}, using defaults", path.display());
        AppConfig::default()
    };

    if let Ok(value) = std::env::var(MAX_IMAGES_ENV) {
        config.apply_max_images_override(&value)?;
        log::info!("Image cap overridden to {}", config.gallery.max_images);
    }

    Ok(config)
}
