use crate::constants::DRAGGING_CLASS;
use crate::dom::{self, ItemElement};
use crate::input::DragTracker;
use carousel_core::CarouselEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::HtmlElement,
    pub engine: Rc<RefCell<CarouselEngine<ItemElement>>>,
    pub tracker: Rc<RefCell<DragTracker>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

fn listen(target: &web::HtmlElement, event: &str, handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.container, "pointerdown", move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        if !w2.tracker.borrow_mut().begin(ev.pointer_id(), ev.client_x() as f64) {
            return;
        }
        w2.engine.borrow_mut().on_drag_start();
        _ = w2.container.set_pointer_capture(ev.pointer_id());
        dom::set_class(&w2.container, DRAGGING_CLASS, true);
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.container, "pointermove", move |ev: web::PointerEvent| {
        let delta = w2
            .tracker
            .borrow_mut()
            .delta(ev.pointer_id(), ev.client_x() as f64);
        if let Some(dx) = delta {
            w2.engine.borrow_mut().on_drag_move(dx);
        }
    });
}

fn wire_pointerup(w: &InputWiring, event: &str) {
    let w2 = w.clone();
    listen(&w.container, event, move |ev: web::PointerEvent| {
        if !w2.tracker.borrow_mut().end(ev.pointer_id()) {
            return;
        }
        let target = w2.engine.borrow_mut().on_drag_end();
        log::debug!("[pointer] release, settling to {:.1}", target);
        _ = w2.container.release_pointer_capture(ev.pointer_id());
        dom::set_class(&w2.container, DRAGGING_CLASS, false);
    });
}
