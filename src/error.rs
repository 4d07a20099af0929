use std::fmt;
use swipe_gallery::GalleryError;

/// Central error types for the gallery host page
#[derive(Debug)]
pub enum AppError {
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Config file could not be parsed
    Config(toml::de::Error),
    /// Page content could not be parsed
    Page(serde_json::Error),
    /// Gallery content error
    Gallery(GalleryError),
    /// Validation error (e.g. invalid inputs)
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Config(e) => write!(f, "Config error: {}", e),
            AppError::Page(e) => write!(f, "Page error: {}", e),
            AppError::Gallery(e) => write!(f, "Gallery error: {}", e),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Page(e)
    }
}

impl From<GalleryError> for AppError {
    fn from(e: GalleryError) -> Self {
        AppError::Gallery(e)
    }
}

/// User-friendly error messages for the page
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Filesystem(_) => "Error reading gallery files.".to_string(),
            AppError::Config(_) => "The gallery configuration is invalid.".to_string(),
            AppError::Page(_) => "The page content is invalid.".to_string(),
            AppError::Gallery(_) => "The gallery could not be loaded.".to_string(),
            AppError::Validation(msg) => msg.clone(),
        }
    }
}
