//! Dioxus UI components for the swipe gallery
//!
//! [`SwipeGallery`] renders the thumbnail strip and the main track for one
//! discovered gallery and forwards platform input to its controller. The
//! controller renders through a [`SignalSurface`], so every frame it emits
//! lands in a signal the component reads for the track style and the
//! active thumbnail.

use crate::content::GalleryImage;
use crate::controller::GalleryController;
use crate::models::{GalleryConfig, Point};
use crate::navigation::NavKey;
use crate::render::{Frame, Surface};
use dioxus::core::Task;
use dioxus::prelude::*;
use std::time::Duration;
use web_time::Instant;

/// Surface that publishes frames into a signal
#[derive(Debug, Clone, Copy)]
pub struct SignalSurface {
    frame: Signal<Option<Frame>>,
}

impl SignalSurface {
    /// Must be called inside a component scope (e.g. from `use_hook`)
    pub fn new() -> Self {
        Self {
            frame: Signal::new(None),
        }
    }

    pub fn frame(&self) -> Signal<Option<Frame>> {
        self.frame
    }
}

impl Surface for SignalSurface {
    fn apply(&mut self, frame: &Frame) {
        self.frame.set(Some(frame.clone()));
    }
}

/// Controller handle shared between the page and its gallery component
pub type GalleryHandle = Signal<GalleryController<SignalSurface>>;

/// Deliver a page-wide key press to every gallery; each one decides by its own scope
pub fn dispatch_key(handles: &[GalleryHandle], key_name: &str) {
    let Some(key) = NavKey::from_key_name(key_name) else {
        return;
    };
    for handle in handles {
        let mut handle = *handle;
        handle.write().key_down(key);
    }
}

async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

fn first_touch(evt: &TouchEvent) -> Option<Point> {
    evt.touches().first().map(|touch| {
        let coords = touch.client_coordinates();
        Point::new(coords.x, coords.y)
    })
}

fn pointer_point(evt: &PointerEvent) -> Point {
    let coords = evt.client_coordinates();
    Point::new(coords.x, coords.y)
}

fn thumbnail_class(base: &str, active_class: &str, active: bool) -> String {
    if active {
        format!("{} {}", base, active_class)
    } else {
        base.to_string()
    }
}

// Touch input arrives through the touch handlers; pointer handlers only
// take the mouse so a touch is never processed twice.
fn is_mouse(evt: &PointerEvent) -> bool {
    evt.pointer_type() == "mouse"
}

/// Swipeable gallery with a thumbnail strip
///
/// Renders the container shape the gallery engine expects: a thumbnail
/// strip, a main region and a track with one slide per image.
#[component]
pub fn SwipeGallery(
    /// Controller created for this gallery by discovery
    controller: GalleryHandle,
    /// Prepared images, index-aligned with the controller's slides
    images: Vec<GalleryImage>,
    #[props(default)] config: GalleryConfig,
    /// Extra classes for the container, next to the marker class
    #[props(default)]
    class: String,
    /// Provider image count before blank entries were dropped
    #[props(default)]
    image_count: Option<usize>,
) -> Element {
    let mut controller = controller;
    let mut settle_task = use_signal(|| None::<Task>);

    let gallery_id = controller.peek().id().to_string();
    let frame_signal = controller.peek().surface().frame();
    let frame = frame_signal.read().clone();

    let transform = frame
        .as_ref()
        .map(Frame::track_transform)
        .unwrap_or_default();
    let transition = frame
        .as_ref()
        .map(Frame::track_transition)
        .unwrap_or_else(|| "none".to_string());
    let active = frame.as_ref().and_then(|f| f.active_thumbnail);

    let thumbs_class = config.thumbs_class.clone();
    let thumb_class = config.thumb_class.clone();
    let active_class = config.active_class.clone();
    let track_class = config.track_class.clone();
    let slide_class = config.slide_class.clone();
    let image_count = image_count.unwrap_or(images.len());
    let container_class = if class.is_empty() {
        config.marker_class.clone()
    } else {
        format!("{} {}", config.marker_class, class)
    };

    rsx! {
        div {
            class: "{container_class}",
            id: "{gallery_id}",
            "data-gallery-count": "{image_count}",
            tabindex: "0",
            onmouseenter: move |_| controller.write().set_hovered(true),
            onmouseleave: move |_| controller.write().set_hovered(false),
            onfocusin: move |_| controller.write().set_focused(true),
            onfocusout: move |_| controller.write().set_focused(false),
            onresize: move |_| {
                controller.write().resize(Instant::now());
                if let Some(task) = settle_task.write().take() {
                    task.cancel();
                }
                let task = spawn(async move {
                    loop {
                        let Some(deadline) = controller.peek().settle_deadline() else {
                            break;
                        };
                        sleep(deadline.saturating_duration_since(Instant::now())).await;
                        controller.write().poll_settle(Instant::now());
                    }
                });
                settle_task.set(Some(task));
            },

            // Thumbnails
            div {
                class: "{thumbs_class}",
                role: "tablist",
                "aria-label": "Product images",
                for (index, image) in images.iter().enumerate() {
                    div {
                        key: "thumb-{index}",
                        class: thumbnail_class(&thumb_class, &active_class, active == Some(index)),
                        "data-index": "{index}",
                        role: "tab",
                        "aria-selected": if active == Some(index) { "true" } else { "false" },
                        "aria-controls": "{gallery_id}-slide-{index}",
                        tabindex: if active == Some(index) { "0" } else { "-1" },
                        onclick: move |_| {
                            controller.write().select_thumbnail(index);
                        },
                        img {
                            src: "{image.thumbnail_url}",
                            alt: "{image.thumbnail_alt}",
                            loading: if image.lazy { "lazy" } else { "eager" },
                            width: "70",
                            height: "70",
                        }
                    }
                }
            }

            // Main image slider
            div {
                class: "wc-main",
                role: "region",
                "aria-label": "Product gallery",
                div {
                    class: "{track_class}",
                    style: "transform: {transform}; transition: {transition};",
                    ontouchstart: move |evt: TouchEvent| {
                        if let Some(point) = first_touch(&evt) {
                            controller.write().pointer_down(point);
                        }
                    },
                    ontouchmove: move |evt: TouchEvent| {
                        if let Some(point) = first_touch(&evt) {
                            if controller.write().pointer_move(point).prevent_default {
                                evt.prevent_default();
                            }
                        }
                    },
                    ontouchend: move |_| controller.write().pointer_up(),
                    ontouchcancel: move |_| controller.write().pointer_cancel(),
                    onpointerdown: move |evt: PointerEvent| {
                        if is_mouse(&evt) {
                            controller.write().pointer_down(pointer_point(&evt));
                        }
                    },
                    onpointermove: move |evt: PointerEvent| {
                        if !is_mouse(&evt) || !controller.peek().is_dragging() {
                            return;
                        }
                        if controller.write().pointer_move(pointer_point(&evt)).prevent_default {
                            evt.prevent_default();
                        }
                    },
                    onpointerup: move |evt: PointerEvent| {
                        if is_mouse(&evt) {
                            controller.write().pointer_up();
                        }
                    },
                    onpointerleave: move |evt: PointerEvent| {
                        if is_mouse(&evt) && controller.peek().is_dragging() {
                            controller.write().pointer_cancel();
                        }
                    },
                    for (index, image) in images.iter().enumerate() {
                        div {
                            key: "slide-{index}",
                            class: "{slide_class}",
                            id: "{gallery_id}-slide-{index}",
                            role: "tabpanel",
                            "aria-label": "{image.alt}",
                            img {
                                src: "{image.url}",
                                alt: "{image.alt}",
                                loading: if image.lazy { "lazy" } else { "eager" },
                                width: image.width.map(|w| w.to_string()),
                                height: image.height.map(|h| h.to_string()),
                                draggable: "false",
                            }
                        }
                    }
                }
            }
        }
    }
}
