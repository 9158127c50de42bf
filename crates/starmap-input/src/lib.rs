//! Pointer input for map views: host-routed pointer events buffered per frame.

pub mod pointer;

pub use pointer::{PointerEvent, PointerQueue, ScrollDelta};
