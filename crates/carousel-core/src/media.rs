//! Edge-triggered play/pause signalling for media-bearing items.

use crate::item::ItemId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaAction {
    Play,
    Pause,
}

/// A play or pause request for the media attached to one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSignal {
    pub index: usize,
    pub id: ItemId,
    pub action: MediaAction,
}

/// Remembers the previous front-zone state of one item and reports crossings.
///
/// Feeding the same value repeatedly never produces a second action.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrontTransitionDetector {
    was_front: bool,
}

impl FrontTransitionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_front(&self) -> bool {
        self.was_front
    }

    pub fn observe(&mut self, is_front: bool) -> Option<MediaAction> {
        let action = match (self.was_front, is_front) {
            (false, true) => Some(MediaAction::Play),
            (true, false) => Some(MediaAction::Pause),
            _ => None,
        };
        self.was_front = is_front;
        action
    }
}
