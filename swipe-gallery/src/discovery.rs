//! Startup scan for gallery containers.
//!
//! The host document is scanned once for containers carrying the marker
//! class. Each usable container becomes an independent
//! [`GalleryController`]; the caller owns the returned handles; nothing is
//! kept in a global registry. Containers added after the scan are not
//! picked up.

use crate::controller::GalleryController;
use crate::models::GalleryConfig;
use crate::render::Surface;

/// One container found on the page
pub trait GalleryContainer {
    type Surface: Surface;

    fn id(&self) -> String;
    fn has_track(&self) -> bool;
    fn slide_count(&self) -> usize;
    fn thumbnail_count(&self) -> usize;
    /// Hand over the presentation handle for the track and thumbnails
    fn into_surface(self) -> Self::Surface;
}

/// A page that can be searched for gallery containers
pub trait GalleryDocument {
    type Container: GalleryContainer;

    /// All containers carrying `marker_class`, in document order
    fn containers(&self, marker_class: &str) -> Vec<Self::Container>;
}

/// Build one controller per usable container
pub fn discover<D: GalleryDocument>(
    document: &D,
    config: &GalleryConfig,
) -> Vec<GalleryController<<D::Container as GalleryContainer>::Surface>> {
    let containers = document.containers(&config.marker_class);
    let found = containers.len();

    let controllers: Vec<_> = containers
        .into_iter()
        .filter_map(|container| {
            let id = container.id();
            if !container.has_track() {
                log::debug!("Gallery {}: no track, skipping", id);
                return None;
            }
            let slides = container.slide_count();
            let thumbnails = container.thumbnail_count();
            if slides == 0 {
                log::debug!("Gallery {}: no slides, skipping", id);
                return None;
            }
            GalleryController::new(id, slides, thumbnails, container.into_surface(), config)
        })
        .collect();

    log::info!(
        "Discovered {} gallery containers, {} active",
        found,
        controllers.len()
    );
    controllers
}
