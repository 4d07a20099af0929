use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use swipe_gallery::{
    capped_count, prepare_images, GalleryConfig, GalleryContainer, GalleryDocument, GalleryError, GalleryImage,
    ImageRecord, SignalSurface,
};
use uuid::Uuid;

/// Page content as delivered by the content provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageSpec {
    pub title: String,
    pub blocks: Vec<BlockSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockSpec {
    Text {
        body: String,
    },
    Gallery {
        /// Extra class for styling, the marker class is always present
        #[serde(default)]
        class: Option<String>,
        /// Per-gallery override of the lazy-loading setting
        #[serde(default)]
        lazy: Option<bool>,
        images: Vec<ImageRecord>,
    },
}

impl PageSpec {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Built-in product page with two galleries
    pub fn demo() -> Self {
        let images = |ids: &[u32], name: &str| -> Vec<ImageRecord> {
            ids.iter()
                .enumerate()
                .map(|(i, id)| ImageRecord {
                    url: format!("https://picsum.photos/id/{}/1200/900", id),
                    alt: (i == 0).then(|| format!("{} front view", name)),
                    width: Some(1200),
                    height: Some(900),
                    thumbnail_url: Some(format!("https://picsum.photos/id/{}/150/150", id)),
                })
                .collect()
        };

        PageSpec {
            title: "Product gallery".to_string(),
            blocks: vec![
                BlockSpec::Text {
                    body: "Swipe sideways on the large image or pick a thumbnail. \
                           Arrow keys work while the pointer is over a gallery."
                        .to_string(),
                },
                BlockSpec::Gallery {
                    class: None,
                    lazy: None,
                    images: images(&[10, 11, 12, 13], "Mountain lodge"),
                },
                BlockSpec::Text {
                    body: "A second gallery on the same page keeps its own state.".to_string(),
                },
                BlockSpec::Gallery {
                    class: Some("compact".to_string()),
                    lazy: None,
                    images: images(&[20, 21, 22, 23, 24, 25], "Desk lamp"),
                },
            ],
        }
    }
}

/// Load page content from `path`, or the demo page when no path is configured
pub fn load_page(path: Option<&Path>) -> Result<PageSpec, AppError> {
    match path {
        Some(path) => {
            log::info!("Loading page from {}", path.display());
            PageSpec::from_json(&std::fs::read_to_string(path)?)
        }
        None => Ok(PageSpec::demo()),
    }
}

/// A rendered gallery block
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryBlock {
    pub id: String,
    pub classes: Vec<String>,
    pub images: Vec<GalleryImage>,
    /// Provider images after the cap, before blank entries are dropped
    pub image_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBlock {
    Text(String),
    Gallery(GalleryBlock),
}

/// The host page the galleries are discovered on
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    pub title: String,
    pub blocks: Vec<PageBlock>,
}

impl PageDocument {
    /// Template the page: prepare gallery content and assign container ids
    pub fn from_spec(spec: PageSpec, config: &GalleryConfig) -> Result<Self, AppError> {
        let mut blocks = Vec::with_capacity(spec.blocks.len());

        for block in spec.blocks {
            match block {
                BlockSpec::Text { body } => blocks.push(PageBlock::Text(body)),
                BlockSpec::Gallery {
                    class,
                    lazy,
                    images: records,
                } => {
                    let block_config = GalleryConfig {
                        lazy_load: lazy.unwrap_or(config.lazy_load),
                        ..config.clone()
                    };
                    let images = match prepare_images(&records, &block_config) {
                        Ok(images) => images,
                        Err(GalleryError::EmptyGallery) => {
                            log::debug!("Skipping gallery block without images");
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    };

                    let mut classes = vec![config.marker_class.clone()];
                    classes.extend(class);

                    blocks.push(PageBlock::Gallery(GalleryBlock {
                        id: format!("{}-{}", config.marker_class, Uuid::new_v4().simple()),
                        classes,
                        images,
                        image_count: capped_count(&records, config),
                    }));
                }
            }
        }

        Ok(Self {
            title: spec.title,
            blocks,
        })
    }
}

/// A gallery container on the page, handed to discovery
#[derive(Debug, Clone, PartialEq)]
pub struct PageContainer {
    id: String,
    slides: usize,
    thumbnails: usize,
}

impl GalleryContainer for PageContainer {
    type Surface = SignalSurface;

    fn id(&self) -> String {
        self.id.clone()
    }

    // Every templated gallery carries a track
    fn has_track(&self) -> bool {
        true
    }

    fn slide_count(&self) -> usize {
        self.slides
    }

    fn thumbnail_count(&self) -> usize {
        self.thumbnails
    }

    fn into_surface(self) -> SignalSurface {
        SignalSurface::new()
    }
}

impl GalleryDocument for PageDocument {
    type Container = PageContainer;

    fn containers(&self, marker_class: &str) -> Vec<PageContainer> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                PageBlock::Gallery(gallery) if gallery.classes.iter().any(|c| c == marker_class) => {
                    Some(PageContainer {
                        id: gallery.id.clone(),
                        slides: gallery.images.len(),
                        thumbnails: gallery.images.len(),
                    })
                }
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_json() {
        let spec = PageSpec::from_json(
            r#"{
                "title": "Lamp",
                "blocks": [
                    {"type": "text", "body": "Intro"},
                    {"type": "gallery", "images": [{"url": "a.jpg"}, {"url": "b.jpg"}]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(spec.blocks.len(), 2);
        assert!(matches!(&spec.blocks[1], BlockSpec::Gallery { images, class: None, lazy: None } if images.len() == 2));
    }

    #[test]
    fn test_invalid_page_json() {
        let result = PageSpec::from_json(r#"{"title": "x", "blocks": [{"type": "video"}]}"#);
        assert!(matches!(result, Err(AppError::Page(_))));
    }

    #[test]
    fn test_from_spec_skips_empty_galleries() {
        let spec = PageSpec {
            title: "t".to_string(),
            blocks: vec![
                BlockSpec::Gallery {
                    class: None,
                    lazy: None,
                    images: vec![],
                },
                BlockSpec::Gallery {
                    class: None,
                    lazy: None,
                    images: vec![ImageRecord::new("")],
                },
                BlockSpec::Text {
                    body: "b".to_string(),
                },
            ],
        };
        let page = PageDocument::from_spec(spec, &GalleryConfig::default()).unwrap();
        assert_eq!(page.blocks, vec![PageBlock::Text("b".to_string())]);
    }

    #[test]
    fn test_containers_and_ids() {
        let config = GalleryConfig {
            max_images: 5,
            ..GalleryConfig::default()
        };
        let page = PageDocument::from_spec(PageSpec::demo(), &config).unwrap();
        let containers = page.containers("wc-gallery");
        assert_eq!(containers.len(), 2);
        assert_ne!(containers[0].id(), containers[1].id());
        assert!(containers[0].id().starts_with("wc-gallery-"));
        assert_eq!(containers[0].slide_count(), 4);
        // the second demo gallery is capped
        assert_eq!(containers[1].slide_count(), 5);
        assert_eq!(containers[1].thumbnail_count(), 5);

        let galleries: Vec<&GalleryBlock> = page
            .blocks
            .iter()
            .filter_map(|block| match block {
                PageBlock::Gallery(gallery) => Some(gallery),
                _ => None,
            })
            .collect();
        assert_eq!(galleries[1].id, containers[1].id());
        assert_eq!(galleries[1].classes, vec!["wc-gallery", "compact"]);

        assert!(page.containers("carousel").is_empty());
    }

    #[test]
    fn test_gallery_block_options() {
        let spec = PageSpec::from_json(
            r#"{
                "title": "Lamp",
                "blocks": [
                    {"type": "gallery", "lazy": false, "images": [{"url": "a.jpg"}, {"url": ""}, {"url": "c.jpg"}]},
                    {"type": "gallery", "images": [{"url": "a.jpg"}, {"url": "b.jpg"}]}
                ]
            }"#,
        )
        .unwrap();
        let page = PageDocument::from_spec(spec, &GalleryConfig::default()).unwrap();
        let PageBlock::Gallery(eager) = &page.blocks[0] else {
            panic!("expected a gallery block");
        };
        assert_eq!(eager.images.len(), 2);
        assert_eq!(eager.image_count, 3);
        assert!(eager.images.iter().all(|image| !image.lazy));

        let PageBlock::Gallery(lazy) = &page.blocks[1] else {
            panic!("expected a gallery block");
        };
        assert!(lazy.images[1].lazy);
        assert_eq!(lazy.image_count, 2);
    }

    #[test]
    fn test_load_page_default_is_demo() {
        assert_eq!(load_page(None).unwrap(), PageSpec::demo());
    }
}
