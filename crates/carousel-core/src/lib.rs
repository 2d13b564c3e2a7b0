//! Engine behind the portfolio's 3D drag carousel.
//!
//! A single unbounded `rotation` value (degrees) drives everything. Drag input
//! accumulates into it, a damped spring settles it onto the nearest item stop,
//! and every item's position, depth, scale, brightness and tilt are pure
//! functions of it. Items with media receive edge-triggered play/pause
//! signals as they enter and leave the front zone.
//!
//! Nothing in this crate touches a platform API; the web and native
//! front-ends poll or subscribe to the engine and render what it computes.

pub mod config;
pub mod constants;
pub mod engine;
pub mod frame;
pub mod item;
pub mod media;
pub mod ring;
pub mod settle;

pub use config::*;
pub use constants::*;
pub use engine::*;
pub use frame::*;
pub use item::*;
pub use media::*;
pub use ring::*;
pub use settle::*;
