use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One image as supplied by the content provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRecord {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    // Provider-side thumbnail rendition, falls back to `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ImageRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
            width: None,
            height: None,
            thumbnail_url: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// Position in client coordinates (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Configuration for gallery discovery and interaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Class that marks a gallery container on the page
    pub marker_class: String,
    pub track_class: String,
    pub slide_class: String,
    pub thumb_class: String,
    pub thumbs_class: String,
    /// Class set on exactly one thumbnail, the current one
    pub active_class: String,
    /// Displacement (px) either axis must exceed before the axis is locked
    pub dead_zone: f64,
    /// Horizontal displacement (px) a drag must exceed to change slides
    pub swipe_threshold: f64,
    /// Duration of the settle animation
    #[serde(with = "millis")]
    pub transition: Duration,
    /// Quiet period after the last resize before re-rendering
    #[serde(with = "millis")]
    pub resize_quiet: Duration,
    /// Upper bound on images per gallery
    pub max_images: usize,
    /// Lazy-load every image except the first
    pub lazy_load: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            marker_class: "wc-gallery".to_string(),
            track_class: "wc-main-track".to_string(),
            slide_class: "wc-slide".to_string(),
            thumb_class: "wc-thumb".to_string(),
            thumbs_class: "wc-thumbs".to_string(),
            active_class: "active".to_string(),
            dead_zone: 10.0,
            swipe_threshold: 50.0,
            transition: Duration::from_millis(350),
            resize_quiet: Duration::from_millis(250),
            max_images: 20,
            lazy_load: true,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
