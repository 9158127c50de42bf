//! Interactive camera for orbital map views.
//!
//! - [`CameraState`]: pan, zoom, and tilt with clamped setters and the
//!   canvas transform derived from them.
//! - [`DragController`]: pointer-driven panning with safe-margin clamping.
//! - [`FocusAnimator`]: eased center / zoom / tilt-in animations.
//! - [`compute_content_bounds`]: marker bounding box for centering and clamps.
//! - [`MapView`]: ties the above together behind a per-frame `update`.

pub mod bounds;
pub mod camera;
pub mod drag;
pub mod focus;
pub mod view;

pub use bounds::{centered_pan, compute_content_bounds};
pub use camera::{CameraState, MapTransform, apply_zoom_and_tilt, snap_zoom_to_steps};
pub use drag::{
    DragController, DragSession, clamp_canvas_from_start, clamp_canvas_to_safe_margin,
};
pub use focus::{AnimationPhase, FocusAnimator, FocusRequest, Tween};
pub use view::{MapView, SelectionOutcome};
