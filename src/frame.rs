use crate::constants::{FRONT_CLASS, MAX_FRAME_DT_MS};
use crate::dom::{self, ItemElement};
use crate::media;
use crate::style;
use carousel_core::CarouselEngine;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<CarouselEngine<ItemElement>>>,
    pub last_instant: Instant,
    // rotation the DOM currently reflects; None forces a full restyle
    pub applied_rotation: Option<f64>,
}

impl FrameContext {
    pub fn new(engine: Rc<RefCell<CarouselEngine<ItemElement>>>) -> Self {
        Self {
            engine,
            last_instant: Instant::now(),
            applied_rotation: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let mut engine = self.engine.borrow_mut();
        engine.tick(dt);

        let signals = engine.drain_media_signals();
        for signal in &signals {
            if let Some(item) = engine.item(signal.index) {
                media::apply_signal(signal, &item.payload);
            }
        }

        let rotation = engine.rotation();
        if self.applied_rotation == Some(rotation) {
            return;
        }
        for frame in engine.frames() {
            let Some(item) = engine.item(frame.index) else {
                continue;
            };
            let el = &item.payload.element;
            for (property, value) in style::item_style(&frame) {
                dom::set_style(el, property, &value);
            }
            dom::set_class(el, FRONT_CLASS, frame.is_front);
        }
        self.applied_rotation = Some(rotation);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
