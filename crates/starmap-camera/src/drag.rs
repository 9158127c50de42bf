//! Pointer-driven panning.
//!
//! A press starts a [`DragSession`] remembering where the pointer and the pan
//! were. Every move proposes `start_pan + (pointer - start_pointer)`, which the
//! caller clamps with [`clamp_canvas_to_safe_margin`] (or
//! [`clamp_canvas_from_start`] when the drag may begin out of range) before
//! storing it.

use glam::Vec2;

/// Pointer and pan captured when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_local: Vec2,
    pub start_pan_offset: Vec2,
}

/// `Idle` ⇄ `Dragging` state machine.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging. A drag already in progress is replaced.
    pub fn begin_drag(&mut self, pointer_local: Vec2, current_pan: Vec2) {
        self.session = Some(DragSession {
            start_local: pointer_local,
            start_pan_offset: current_pan,
        });
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Pointer travel since the drag began; zero when idle.
    pub fn compute_drag_delta(&self, pointer_local: Vec2) -> Vec2 {
        self.session
            .map_or(Vec2::ZERO, |s| pointer_local - s.start_local)
    }

    /// Unclamped pan for the current pointer position, if dragging.
    pub fn proposed_pan(&self, pointer_local: Vec2) -> Option<Vec2> {
        self.session
            .map(|s| s.start_pan_offset + self.compute_drag_delta(pointer_local))
    }

    /// Stop dragging, returning the finished session.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

/// Allowed `[min, max]` for one axis of the content's top-left corner.
fn axis_range(content: f32, viewport: f32, margin: f32) -> (f32, f32) {
    let min = viewport - content + margin;
    let max = -margin;
    if min > max {
        let centered = (viewport - content) * 0.5;
        (centered, centered)
    } else {
        (min, max)
    }
}

fn clamp_axis(proposed: f32, content: f32, viewport: f32, margin: f32) -> f32 {
    let (min, max) = axis_range(content, viewport, margin);
    proposed.clamp(min, max)
}

/// Like [`clamp_axis`], but the range always reaches `start`.
fn clamp_axis_from(proposed: f32, start: f32, content: f32, viewport: f32, margin: f32) -> f32 {
    let (min, max) = axis_range(content, viewport, margin);
    if !start.is_finite() {
        return proposed.clamp(min, max);
    }
    proposed.clamp(min.min(start), max.max(start))
}

/// Clamp the content's top-left corner so at least `margin` pixels of content
/// overhang every viewport edge.
///
/// Per axis the corner is kept in `[viewport - content + margin, -margin]`.
/// An axis where the content is too small for that range is centered in the
/// viewport instead.
pub fn clamp_canvas_to_safe_margin(
    proposed: Vec2,
    content_size: Vec2,
    viewport_size: Vec2,
    margin: f32,
) -> Vec2 {
    Vec2::new(
        clamp_axis(proposed.x, content_size.x, viewport_size.x, margin),
        clamp_axis(proposed.y, content_size.y, viewport_size.y, margin),
    )
}

/// [`clamp_canvas_to_safe_margin`] for a drag that began with the corner at
/// `start`.
///
/// An animation may leave the corner outside the safe range. The range is
/// widened per axis to include `start`, so a drag never jumps on its first
/// move; it can only go back toward the safe range or stay put.
pub fn clamp_canvas_from_start(
    proposed: Vec2,
    start: Vec2,
    content_size: Vec2,
    viewport_size: Vec2,
    margin: f32,
) -> Vec2 {
    Vec2::new(
        clamp_axis_from(proposed.x, start.x, content_size.x, viewport_size.x, margin),
        clamp_axis_from(proposed.y, start.y, content_size.y, viewport_size.y, margin),
    )
}
