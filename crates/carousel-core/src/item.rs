//! Items on the ring and their identifiers.

use std::fmt;

/// Stable, unique identifier of a carousel item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

/// Reference to playable media (a video URL or element handle name).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSource(pub String);

/// One entry on the ring. The engine never looks inside `payload`.
#[derive(Clone, Debug)]
pub struct CarouselItem<P> {
    pub id: ItemId,
    pub media: Option<MediaSource>,
    pub payload: P,
}

impl<P> CarouselItem<P> {
    pub fn new(id: impl Into<ItemId>, payload: P) -> Self {
        Self {
            id: id.into(),
            media: None,
            payload,
        }
    }

    pub fn with_media(mut self, source: impl Into<String>) -> Self {
        self.media = Some(MediaSource(source.into()));
        self
    }

    #[inline]
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }
}
