use dioxus::prelude::*;
use std::path::Path;
use std::rc::Rc;
use swipe_gallery::{discover, dispatch_key, GalleryConfig, GalleryHandle, SwipeGallery};

mod config;
mod error;
mod page;

use config::{load_config, CONFIG_FILE};
use error::AppError;
use page::{load_page, PageBlock, PageDocument};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    dioxus::launch(App);
}

/// Page state built once at startup
struct LoadedPage {
    document: PageDocument,
    config: GalleryConfig,
    handles: Vec<GalleryHandle>,
}

/// Load config and content, then scan the page for galleries.
///
/// Must run inside a component scope: the controllers render into signals.
fn startup() -> Result<LoadedPage, AppError> {
    let app_config = load_config(Path::new(CONFIG_FILE))?;
    let content = load_page(app_config.page.as_deref())?;
    let document = PageDocument::from_spec(content, &app_config.gallery)?;

    let handles = discover(&document, &app_config.gallery)
        .into_iter()
        .map(Signal::new)
        .collect();

    Ok(LoadedPage {
        document,
        config: app_config.gallery,
        handles,
    })
}

#[component]
fn App() -> Element {
    let loaded = use_hook(|| startup().map(Rc::new).map_err(Rc::new));

    let page = match loaded {
        Ok(page) => page,
        Err(e) => {
            log::error!("Failed to load gallery page: {}", e);
            return rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                p { class: "page-error", "{e.user_message()}" }
            };
        }
    };

    let handles = page.handles.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "page",
            tabindex: "-1",
            autofocus: true,
            // Key presses are page-wide; each gallery decides whether it is in scope
            onkeydown: move |evt: KeyboardEvent| {
                dispatch_key(&handles, &evt.key().to_string());
            },

            h1 { "{page.document.title}" }

            for (position, block) in page.document.blocks.iter().enumerate() {
                match block {
                    PageBlock::Text(body) => rsx! {
                        p { key: "block-{position}", "{body}" }
                    },
                    PageBlock::Gallery(gallery) => {
                        let handle = page
                            .handles
                            .iter()
                            .find(|handle| handle.peek().id() == gallery.id)
                            .copied();
                        let extra_classes = gallery
                            .classes
                            .iter()
                            .skip(1)
                            .cloned()
                            .collect::<Vec<_>>()
                            .join(" ");
                        match handle {
                            Some(controller) => rsx! {
                                SwipeGallery {
                                    key: "block-{position}",
                                    controller,
                                    images: gallery.images.clone(),
                                    config: page.config.clone(),
                                    class: extra_classes,
                                    image_count: gallery.image_count,
                                }
                            },
                            None => rsx! {},
                        }
                    }
                }
            }
        }
    }
}
