use crate::dom::ItemElement;
use crate::input::{carousel_owns_key, index_for_digit, step_for_key, DragTracker, KeyContext};
use carousel_core::CarouselEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(
    ev: &web::KeyboardEvent,
    engine: &Rc<RefCell<CarouselEngine<ItemElement>>>,
    tracker: &Rc<RefCell<DragTracker>>,
) {
    // Keys are ignored mid-drag; the release will settle anyway.
    if tracker.borrow().is_active() {
        return;
    }
    let target = ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok());
    let tag = target.as_ref().map(|el| el.tag_name());
    let ctx = KeyContext {
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        alt: ev.alt_key(),
        target_tag: tag.as_deref(),
        target_editable: target.as_ref().is_some_and(|el| el.is_content_editable()),
    };
    if !carousel_owns_key(&ctx) {
        return;
    }
    let key = ev.key();
    if let Some(n) = step_for_key(&key) {
        let target = engine.borrow_mut().step(n);
        log::info!("[keys] step {:+} -> {:.1}", n, target);
        ev.prevent_default();
        return;
    }
    let count = engine.borrow().item_count();
    if let Some(index) = index_for_digit(&key, count) {
        let target = engine.borrow_mut().settle_to_index(index);
        log::info!("[keys] jump to item {} -> {:.1}", index, target);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(
    engine: Rc<RefCell<CarouselEngine<ItemElement>>>,
    tracker: Rc<RefCell<DragTracker>>,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &engine, &tracker);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
