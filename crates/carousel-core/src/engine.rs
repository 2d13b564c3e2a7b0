//! The carousel state holder: gesture, settle, navigation and observers.

use crate::config::{CarouselConfig, ConfigError};
use crate::frame::{compute_frame, ItemFrame};
use crate::item::{CarouselItem, ItemId};
use crate::media::{FrontTransitionDetector, MediaSignal};
use crate::ring::RingGeometry;
use crate::settle::{SettleAnimation, SpringParams};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

/// What is currently moving the rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Settling,
}

/// Delivered to subscribers after every rotation change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationEvent {
    pub rotation: f64,
    pub phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Subscriber = Box<dyn FnMut(&RotationEvent)>;

/// Horizontal drag accumulated since the gesture began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    pub start_rotation: f64,
    pub accumulated_dx: f64,
}

pub type MediaSignals = SmallVec<[MediaSignal; 4]>;

pub struct CarouselEngine<P> {
    items: Vec<CarouselItem<P>>,
    index_by_id: FnvHashMap<ItemId, usize>,
    ring: RingGeometry,
    spring: SpringParams,
    drag_factor: f64,
    rotation: f64,
    gesture: Option<DragGesture>,
    settle: Option<SettleAnimation>,
    // one detector per item; None for items without media
    detectors: Vec<Option<FrontTransitionDetector>>,
    pending_media: MediaSignals,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<P> CarouselEngine<P> {
    /// Build an engine over a fixed, ordered item list. Rotation starts at 0.
    ///
    /// The item initially in the front zone queues a `Play` signal if it
    /// carries media.
    pub fn new(items: Vec<CarouselItem<P>>, config: CarouselConfig) -> Result<Self, ConfigError> {
        let (ring, spring) = config.validate(items.len())?;

        let mut index_by_id = FnvHashMap::default();
        for (i, item) in items.iter().enumerate() {
            if index_by_id.insert(item.id.clone(), i).is_some() {
                return Err(ConfigError::DuplicateItemId(item.id.0.clone()));
            }
        }
        let detectors = items
            .iter()
            .map(|item| item.has_media().then(FrontTransitionDetector::new))
            .collect();

        let mut engine = Self {
            items,
            index_by_id,
            ring,
            spring,
            drag_factor: config.drag_factor,
            rotation: 0.0,
            gesture: None,
            settle: None,
            detectors,
            pending_media: SmallVec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        engine.sample_media();
        log::debug!(
            "[carousel] built ring of {} items ({:.1} deg apart)",
            engine.ring.item_count,
            engine.ring.angle_per_item()
        );
        Ok(engine)
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn ring(&self) -> &RingGeometry {
        &self.ring
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.ring.item_count
    }

    pub fn items(&self) -> &[CarouselItem<P>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&CarouselItem<P>> {
        self.items.get(index)
    }

    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn phase(&self) -> Phase {
        if self.gesture.is_some() {
            Phase::Dragging
        } else if self.settle.is_some() {
            Phase::Settling
        } else {
            Phase::Idle
        }
    }

    pub fn gesture(&self) -> Option<&DragGesture> {
        self.gesture.as_ref()
    }

    /// Stop the running settle animation is heading for, if any.
    pub fn settle_target(&self) -> Option<f64> {
        self.settle.as_ref().map(SettleAnimation::target)
    }

    /// Item that faces front once the ring comes to rest nearby.
    pub fn front_index(&self) -> usize {
        self.ring.front_index(self.settle_target().unwrap_or(self.rotation))
    }

    // ---------------- Drag input ----------------

    /// Begin a gesture. A running settle is cancelled where it stands.
    pub fn on_drag_start(&mut self) {
        if let Some(anim) = self.settle.take() {
            log::debug!(
                "[carousel] settle toward {:.1} cancelled at {:.2}",
                anim.target(),
                self.rotation
            );
        }
        self.gesture = Some(DragGesture {
            start_rotation: self.rotation,
            accumulated_dx: 0.0,
        });
    }

    /// Apply an incremental horizontal pointer movement.
    pub fn on_drag_move(&mut self, delta_x: f64) {
        if !delta_x.is_finite() {
            log::warn!("[carousel] ignoring non-finite drag delta {delta_x}");
            return;
        }
        if self.gesture.is_none() {
            self.on_drag_start();
        }
        if let Some(g) = self.gesture.as_mut() {
            g.accumulated_dx += delta_x;
        }
        self.set_rotation(self.rotation + delta_x * self.drag_factor);
    }

    /// Finish the gesture and settle toward the nearest stop. Returns that stop.
    pub fn on_drag_end(&mut self) -> f64 {
        if let Some(g) = self.gesture.take() {
            log::debug!(
                "[carousel] drag ended: dx={:.1} rotation {:.2} -> {:.2}",
                g.accumulated_dx,
                g.start_rotation,
                self.rotation
            );
        }
        let target = self.ring.nearest_stop(self.rotation);
        self.start_settle(target);
        target
    }

    // ---------------- Navigation ----------------

    /// Settle `items` stops forward (positive brings the next index to the
    /// front). Counts from the stop already being settled toward, so repeated
    /// steps queue up instead of being lost mid-animation.
    pub fn step(&mut self, items: i32) -> f64 {
        let base = self
            .settle_target()
            .unwrap_or_else(|| self.ring.nearest_stop(self.rotation));
        let target = base - items as f64 * self.ring.angle_per_item();
        self.gesture = None;
        self.start_settle(target);
        target
    }

    /// Settle along the shortest arc to the stop that puts `index` in front.
    ///
    /// # Panics
    /// If `index` is not below the item count.
    pub fn settle_to_index(&mut self, index: usize) -> f64 {
        let target = self.ring.stop_for_index(index, self.rotation);
        self.gesture = None;
        self.start_settle(target);
        target
    }

    // ---------------- Animation ----------------

    /// Advance the settle animation by one frame. Returns `true` while it is
    /// still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(anim) = self.settle.as_mut() else {
            return false;
        };
        let step = anim.step(dt);
        if step.done {
            log::debug!(
                "[carousel] settled at {:.1} after {:?}",
                step.rotation,
                anim.elapsed()
            );
            self.settle = None;
        }
        self.set_rotation(step.rotation);
        self.settle.is_some()
    }

    fn start_settle(&mut self, target: f64) {
        log::debug!("[carousel] settling {:.2} -> {:.1}", self.rotation, target);
        self.settle = Some(SettleAnimation::new(self.rotation, target, self.spring.clone()));
    }

    // ---------------- Frames ----------------

    /// # Panics
    /// If `index` is not below the item count.
    pub fn frame(&self, index: usize) -> ItemFrame {
        compute_frame(self.rotation, index, &self.ring)
    }

    pub fn frames(&self) -> Vec<ItemFrame> {
        (0..self.ring.item_count).map(|i| self.frame(i)).collect()
    }

    /// Take the play/pause requests produced since the last call.
    pub fn drain_media_signals(&mut self) -> MediaSignals {
        std::mem::take(&mut self.pending_media)
    }

    // ---------------- Observers ----------------

    pub fn subscribe(&mut self, subscriber: impl FnMut(&RotationEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
        self.sample_media();
        let event = RotationEvent {
            rotation,
            phase: self.phase(),
        };
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }

    fn sample_media(&mut self) {
        for (i, slot) in self.detectors.iter_mut().enumerate() {
            let Some(detector) = slot.as_mut() else {
                continue;
            };
            let frame = compute_frame(self.rotation, i, &self.ring);
            if let Some(action) = detector.observe(frame.is_front) {
                let id = self.items[i].id.clone();
                log::debug!("[carousel] media {:?} for item {} ({})", action, i, id);
                self.pending_media.push(MediaSignal {
                    index: i,
                    id,
                    action,
                });
            }
        }
    }
}
