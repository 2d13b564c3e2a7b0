use crate::constants::CONTAINER_TOUCH_ACTION;
use carousel_core::ItemFrame;

// CSS generation for one item frame. Pure so it can be tested off-browser.

/// `transform` value placing an item on the ring.
///
/// Items are absolutely positioned at the container centre; the translate is
/// relative to that point.
pub fn transform_css(frame: &ItemFrame) -> String {
    format!(
        "translate(-50%, -50%) translate3d({:.3}px, 0px, {:.3}px) rotateY({:.3}deg) scale({:.4})",
        frame.x, frame.z, frame.tilt_deg, frame.scale
    )
}

#[inline]
pub fn filter_css(frame: &ItemFrame) -> String {
    format!("brightness({:.4})", frame.brightness)
}

#[inline]
pub fn z_index_css(frame: &ItemFrame) -> String {
    frame.stack_order.to_string()
}

#[inline]
pub fn perspective_css(perspective: f64) -> String {
    format!("{:.0}px", perspective)
}

/// (property, value) pairs applied once to the container at mount.
///
/// Horizontal touch panning is claimed by the carousel; without it the
/// browser scrolls instead and cancels the pointer mid-swipe.
pub fn container_style(perspective: f64) -> [(&'static str, String); 2] {
    [
        ("perspective", perspective_css(perspective)),
        ("touch-action", CONTAINER_TOUCH_ACTION.to_string()),
    ]
}

/// (property, value) pairs applied to an item element each frame.
pub fn item_style(frame: &ItemFrame) -> [(&'static str, String); 3] {
    [
        ("transform", transform_css(frame)),
        ("filter", filter_css(frame)),
        ("z-index", z_index_css(frame)),
    ]
}
