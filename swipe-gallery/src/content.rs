//! Preparation of provider content into per-slide view data.
//!
//! The provider hands over an ordered list of [`ImageRecord`]s. Before it is
//! rendered the list is capped, records without a URL are dropped and alt
//! texts are filled in. Slides and thumbnails are built from the same
//! prepared list, which keeps them index-aligned.

use crate::error::GalleryError;
use crate::models::{GalleryConfig, ImageRecord};

/// View data for one slide and its thumbnail
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub url: String,
    pub thumbnail_url: String,
    pub alt: String,
    pub thumbnail_alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub lazy: bool,
}

/// Parse a JSON array of image records
pub fn load_records_json(json: &str) -> Result<Vec<ImageRecord>, GalleryError> {
    Ok(serde_json::from_str(json)?)
}

/// Number of records left after the cap, blank entries included
pub fn capped_count(records: &[ImageRecord], config: &GalleryConfig) -> usize {
    records.len().min(config.max_images)
}

/// Cap, filter and fill in the provider's records
pub fn prepare_images(
    records: &[ImageRecord],
    config: &GalleryConfig,
) -> Result<Vec<GalleryImage>, GalleryError> {
    if records.is_empty() {
        return Err(GalleryError::EmptyGallery);
    }

    if records.len() > config.max_images {
        log::debug!(
            "Gallery capped from {} to {} images",
            records.len(),
            config.max_images
        );
    }

    // The cap applies before blank entries are dropped, so numbering in
    // fallback alt texts follows the provider's positions.
    let images: Vec<GalleryImage> = records
        .iter()
        .take(config.max_images)
        .enumerate()
        .filter(|(_, record)| !record.url.is_empty())
        .map(|(position, record)| {
            let number = position + 1;
            let alt = record
                .alt
                .as_deref()
                .filter(|alt| !alt.is_empty())
                .map(str::to_string);

            GalleryImage {
                url: record.url.clone(),
                thumbnail_url: record
                    .thumbnail_url
                    .clone()
                    .unwrap_or_else(|| record.url.clone()),
                thumbnail_alt: alt
                    .clone()
                    .unwrap_or_else(|| format!("Product thumbnail {}", number)),
                alt: alt.unwrap_or_else(|| format!("Product image {}", number)),
                width: record.width,
                height: record.height,
                lazy: config.lazy_load && position > 0,
            }
        })
        .collect();

    if images.is_empty() {
        return Err(GalleryError::EmptyGallery);
    }

    Ok(images)
}
