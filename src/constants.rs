// DOM hooks and frame-loop limits used by the web frontend.

// Markup contract
pub const DEFAULT_CONTAINER_SELECTOR: &str = "#carousel";
pub const ITEM_SELECTOR: &str = "[data-carousel-item]";
pub const ITEM_ID_ATTR: &str = "data-id";
pub const DRAGGING_CLASS: &str = "is-dragging"; // toggled on the container during a gesture
pub const FRONT_CLASS: &str = "is-front"; // toggled on items inside the front zone
pub const CONTAINER_TOUCH_ACTION: &str = "pan-y"; // page still scrolls vertically over the ring

// Frame loop
// Long gaps (background tab) are clamped so the settle resumes instead of jumping.
pub const MAX_FRAME_DT_MS: u64 = 100;
