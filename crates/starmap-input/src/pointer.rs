//! Frame-coherent pointer event queue.
//!
//! The host UI layer forwards pointer callbacks through the `on_*` methods as
//! they arrive. The map view drains the queue at the start of its frame update,
//! so every event received since the previous frame is applied before any
//! animation is advanced.

use glam::Vec2;

/// Pixels of a precise (touchpad) scroll that count as one wheel notch.
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Raw scroll amount as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDelta {
    /// Wheel notches (positive = scroll up / zoom in).
    Lines(f32),
    /// Pixel distance from a precise scroll device.
    Pixels(f32),
}

impl ScrollDelta {
    /// Normalize to wheel notches.
    pub fn to_lines(self) -> f32 {
        match self {
            ScrollDelta::Lines(lines) => lines,
            ScrollDelta::Pixels(px) => px / PIXELS_PER_LINE,
        }
    }
}

/// One pointer event in view-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at a position.
    Down(Vec2),
    /// Pointer moved to a position.
    Move(Vec2),
    /// Primary button released.
    Up,
    /// Wheel scrolled, in notches.
    Scroll(f32),
}

/// Buffers pointer events between frames.
///
/// # Usage
///
/// 1. Forward host callbacks via the `on_*` methods.
/// 2. Call [`drain`](Self::drain) once per frame, before animations update.
///
/// Consecutive moves collapse into the latest one and consecutive scrolls add
/// up, since drags only care about the final pointer position of a frame.
#[derive(Debug, Clone, Default)]
pub struct PointerQueue {
    events: Vec<PointerEvent>,
    position: Vec2,
    pressed: bool,
}

impl PointerQueue {
    /// Creates an empty queue with the pointer released at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Event handlers ──────────────────────────────────────────────

    /// Primary button pressed.
    pub fn on_pointer_down(&mut self, local: Vec2) {
        self.position = local;
        self.pressed = true;
        self.events.push(PointerEvent::Down(local));
    }

    /// Pointer moved.
    pub fn on_pointer_move(&mut self, local: Vec2) {
        self.position = local;
        if let Some(PointerEvent::Move(last)) = self.events.last_mut() {
            *last = local;
        } else {
            self.events.push(PointerEvent::Move(local));
        }
    }

    /// Primary button released.
    pub fn on_pointer_up(&mut self) {
        if !self.pressed {
            tracing::trace!("pointer up without matching down");
        }
        self.pressed = false;
        self.events.push(PointerEvent::Up);
    }

    /// Wheel or touchpad scroll.
    pub fn on_scroll(&mut self, delta: ScrollDelta) {
        let lines = delta.to_lines();
        if lines == 0.0 || !lines.is_finite() {
            return;
        }
        if let Some(PointerEvent::Scroll(acc)) = self.events.last_mut() {
            *acc += lines;
        } else {
            self.events.push(PointerEvent::Scroll(lines));
        }
    }

    /// Queue an already-decoded event.
    pub fn push(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => self.on_pointer_down(p),
            PointerEvent::Move(p) => self.on_pointer_move(p),
            PointerEvent::Up => self.on_pointer_up(),
            PointerEvent::Scroll(lines) => self.on_scroll(ScrollDelta::Lines(lines)),
        }
    }

    /// Takes every queued event in arrival order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, PointerEvent> {
        self.events.drain(..)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Last known pointer position in view-local coordinates.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the primary button is currently held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Number of events waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_drain_in_arrival_order() {
        let mut q = PointerQueue::new();
        q.on_pointer_down(Vec2::new(10.0, 10.0));
        q.on_pointer_move(Vec2::new(20.0, 15.0));
        q.on_pointer_up();
        let events: Vec<_> = q.drain().collect();
        assert_eq!(
            events,
            vec![
                PointerEvent::Down(Vec2::new(10.0, 10.0)),
                PointerEvent::Move(Vec2::new(20.0, 15.0)),
                PointerEvent::Up,
            ]
        );
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn test_consecutive_moves_collapse() {
        let mut q = PointerQueue::new();
        q.on_pointer_down(Vec2::ZERO);
        q.on_pointer_move(Vec2::new(1.0, 1.0));
        q.on_pointer_move(Vec2::new(5.0, 2.0));
        q.on_pointer_move(Vec2::new(9.0, 3.0));
        assert_eq!(q.pending(), 2);
        assert_eq!(q.position(), Vec2::new(9.0, 3.0));
        let last = q.drain().last();
        assert_eq!(last, Some(PointerEvent::Move(Vec2::new(9.0, 3.0))));
    }

    #[test]
    fn test_scroll_accumulates_within_frame() {
        let mut q = PointerQueue::new();
        q.on_scroll(ScrollDelta::Lines(1.0));
        q.on_scroll(ScrollDelta::Lines(0.5));
        let events: Vec<_> = q.drain().collect();
        assert_eq!(events, vec![PointerEvent::Scroll(1.5)]);
    }

    #[test]
    fn test_pixel_scroll_normalized() {
        assert!((ScrollDelta::Pixels(80.0).to_lines() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_scroll_ignored() {
        let mut q = PointerQueue::new();
        q.on_scroll(ScrollDelta::Lines(0.0));
        q.on_scroll(ScrollDelta::Pixels(f32::NAN));
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn test_pressed_state_tracked() {
        let mut q = PointerQueue::new();
        q.push(PointerEvent::Down(Vec2::ONE));
        assert!(q.is_pressed());
        q.push(PointerEvent::Up);
        assert!(!q.is_pressed());
    }
}
