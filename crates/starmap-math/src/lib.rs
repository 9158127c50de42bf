//! 2D boxes, easing curves, and interpolation helpers shared by the starmap crates.

mod box2;
mod easing;

pub use box2::Box2;
pub use easing::{EasingFunction, Lerp, ease_in_out};
