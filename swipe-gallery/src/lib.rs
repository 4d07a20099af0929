//! # Swipe Gallery
//!
//! A reusable image gallery engine: a thumbnail strip plus a swipeable main
//! viewport.
//!
//! This crate provides:
//! - Slide index state that can never leave `0..len`
//! - A touch/pointer gesture recognizer with axis locking, so vertical drags
//!   keep scrolling the page
//! - A transition renderer that settles with an animation or follows the
//!   finger 1:1 during a drag
//! - Thumbnail, keyboard and resize-settle navigation
//! - Startup discovery of gallery containers on a host page
//!
//! ## Platform Separation
//!
//! The engine itself is platform independent: the host page is reached
//! through the [`GalleryDocument`] and [`Surface`] traits. Dioxus components
//! wiring it to real input events live behind the `components` feature.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use swipe_gallery::{discover, GalleryConfig};
//!
//! let config = GalleryConfig::default();
//! let mut galleries = discover(&page, &config);
//!
//! galleries[0].pointer_down(Point::new(200.0, 40.0));
//! galleries[0].pointer_move(Point::new(120.0, 42.0));
//! galleries[0].pointer_up();
//! assert_eq!(galleries[0].current_index(), 1);
//! ```

pub mod content;
pub mod controller;
pub mod debounce;
pub mod discovery;
pub mod error;
pub mod gesture;
pub mod models;
pub mod navigation;
pub mod render;
pub mod state;

#[cfg(feature = "components")]
pub mod components;

pub use content::{capped_count, load_records_json, prepare_images, GalleryImage};
pub use controller::{GalleryController, MoveResponse};
pub use debounce::Debounce;
pub use discovery::{discover, GalleryContainer, GalleryDocument};
pub use error::GalleryError;
pub use gesture::{Axis, DragState, EndOutcome, GestureRecognizer, MoveOutcome, Swipe};
pub use models::{GalleryConfig, ImageRecord, Point};
pub use navigation::{NavKey, PointerScope};
pub use render::{Frame, Surface, TransitionRenderer};
pub use state::SlideIndex;

#[cfg(feature = "components")]
pub use components::{dispatch_key, GalleryHandle, SignalSurface, SwipeGallery};
