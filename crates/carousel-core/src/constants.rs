// Default tuning for the ring, drag and settle spring.
// These match the values the portfolio pages ship with.

// Ring layout
pub const FULL_TURN_DEG: f64 = 360.0;
pub const DEFAULT_RADIUS: f64 = 170.0; // same linear units as the rendered card size
pub const DEFAULT_PERSPECTIVE: f64 = 1500.0; // viewer distance used for projection

// Drag
pub const DEFAULT_DRAG_FACTOR: f64 = 0.3; // degrees of rotation per pixel of drag

// Settle spring
pub const DEFAULT_SETTLE_STIFFNESS: f64 = 90.0;
pub const DEFAULT_SETTLE_DAMPING: f64 = 20.0;
pub const DEFAULT_SETTLE_MASS: f64 = 1.0;
pub const DEFAULT_REST_DELTA_DEG: f64 = 0.01; // distance to target that counts as arrived
pub const DEFAULT_REST_SPEED_DEG_PER_SEC: f64 = 0.05;

// Per-item visuals
pub const SCALE_BASE: f64 = 0.8; // scale of an item seen edge-on
pub const SCALE_SPAN: f64 = 0.2; // extra scale when fully front
pub const DEFAULT_MIN_BRIGHTNESS: f64 = 0.6;
pub const DEFAULT_MAX_BRIGHTNESS: f64 = 1.0;
pub const DEFAULT_MAX_TILT_DEG: f64 = 30.0;
pub const FLIP_DEG: f64 = 180.0; // added tilt once an item reaches the far right
pub const DEFAULT_FRONT_ZONE: f64 = 0.9; // fraction of radius z must exceed to count as front
