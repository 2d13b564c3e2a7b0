#![cfg(target_arch = "wasm32")]
//! Browser binding for the portfolio carousel.
//!
//! Finds the carousel container, builds a [`CarouselEngine`] over its item
//! elements, feeds it pointer and keyboard input, and restyles the items from
//! the engine's frames on every animation frame.

use carousel_core::CarouselEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod attrs;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod media;
mod style;

use constants::DEFAULT_CONTAINER_SELECTOR;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    // Pages without a carousel are fine; only log.
    if let Err(e) = init(DEFAULT_CONTAINER_SELECTOR) {
        log::info!("carousel not mounted: {:#}", e);
    }
    Ok(())
}

/// Mount a carousel on the element matching `selector`. Exposed so pages
/// rendering the container late can attach it themselves.
#[wasm_bindgen]
pub fn mount(selector: &str) -> Result<(), JsValue> {
    init(selector).map_err(|e| {
        log::error!("mount error: {:#}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn init(selector: &str) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::find_container(&document, selector)?;

    let config = dom::read_config(&container);
    for (property, value) in style::container_style(config.perspective) {
        dom::set_style(&container, property, &value);
    }
    let items = dom::collect_items(&container)?;
    let engine = CarouselEngine::new(items, config)?;
    log::info!(
        "[carousel] mounted {} with {} items",
        selector,
        engine.item_count()
    );
    let engine = Rc::new(RefCell::new(engine));
    let tracker = Rc::new(RefCell::new(input::DragTracker::default()));

    events::wire_input_handlers(events::InputWiring {
        container: container.clone(),
        engine: engine.clone(),
        tracker: tracker.clone(),
    });
    events::wire_global_keydown(engine.clone(), tracker);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(engine)));
    frame::start_loop(frame_ctx);
    Ok(())
}
