//! Frame driver for one map view.
//!
//! [`MapView`] owns the camera, drag, animation, and pointer state of a
//! single system or sector map. The host forwards pointer events with
//! [`MapView::push_pointer`] at any time and calls [`MapView::update`] once
//! per frame; queued events are applied before animations advance, so a drag
//! started during an animation cancels it before it moves the camera again.

use glam::Vec2;
use rustc_hash::FxHashSet;
use starmap_config::CameraConfig;
use starmap_input::{PointerEvent, PointerQueue};
use starmap_math::Box2;
use starmap_orbit::MarkerRect;

use crate::bounds::{centered_pan, compute_content_bounds};
use crate::camera::{CameraState, MapTransform, snap_zoom_to_steps};
use crate::drag::{DragController, clamp_canvas_from_start};
use crate::focus::{AnimationPhase, FocusAnimator, FocusRequest};

/// Result of [`MapView::select`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// No marker has that name.
    NotFound,
    /// A new body was selected; the camera is moving to it.
    Focused,
    /// The already-selected body was selected again. The host typically
    /// drills down (opens the sector map for a planet).
    Activated,
}

/// Camera controller of one map view.
#[derive(Debug)]
pub struct MapView {
    config: CameraConfig,
    camera: CameraState,
    drag: DragController,
    focus: FocusAnimator,
    pointer: PointerQueue,
    viewport: Vec2,
    markers: Vec<MarkerRect>,
    /// Names of markers left out of the content bounds and hit testing.
    hidden: FxHashSet<String>,
    bounds: Box2,
    selected: Option<String>,
}

impl MapView {
    /// A view with zoom 1 that starts tilting in immediately.
    pub fn new(config: &CameraConfig, viewport: Vec2) -> Self {
        let mut camera = CameraState::from_config(config);
        let mut focus = FocusAnimator::from_config(config);
        focus.start_tilt_in(&mut camera, config.target_tilt, config.tilt_duration);
        Self {
            config: config.clone(),
            camera,
            drag: DragController::new(),
            focus,
            pointer: PointerQueue::new(),
            viewport,
            markers: Vec::new(),
            hidden: FxHashSet::default(),
            bounds: Box2::ZERO,
            selected: None,
        }
    }

    /// Replace the markers, recompute the content bounds, and center them.
    ///
    /// A selection whose marker disappeared is cleared. Markers hidden with
    /// [`set_marker_active`](Self::set_marker_active) stay hidden.
    pub fn set_layout(&mut self, markers: Vec<MarkerRect>) {
        self.markers = markers;
        self.recompute_bounds();

        if let Some(name) = &self.selected
            && self.marker(name).is_none()
        {
            log::debug!("Selected body '{name}' left the layout; clearing selection");
            self.clear_selection();
        }

        self.camera
            .set_pan_offset(centered_pan(&self.bounds, self.viewport, &self.camera.transform()));
        log::debug!(
            "Layout set: {} markers, bounds {:?}..{:?}",
            self.markers.len(),
            self.bounds.min,
            self.bounds.max
        );
    }

    /// Show or hide one marker without replacing the layout.
    ///
    /// Hidden markers are left out of the content bounds and cannot be hit or
    /// selected. Hiding the selected marker clears the selection. The pan is
    /// left alone. Returns `false` if no marker has that name.
    pub fn set_marker_active(&mut self, name: &str, active: bool) -> bool {
        if !self.markers.iter().any(|m| m.name == name) {
            return false;
        }
        let changed = if active {
            self.hidden.remove(name)
        } else {
            self.hidden.insert(name.to_string())
        };
        if changed {
            if !active && self.selected.as_deref() == Some(name) {
                self.clear_selection();
            }
            self.recompute_bounds();
            log::debug!(
                "Marker '{name}' active={active}; bounds {:?}..{:?}",
                self.bounds.min,
                self.bounds.max
            );
        }
        true
    }

    pub fn is_marker_active(&self, name: &str) -> bool {
        self.marker(name).is_some()
    }

    fn recompute_bounds(&mut self) {
        let padding = Vec2::new(self.config.content_padding_x, self.config.content_padding_y);
        let hidden = &self.hidden;
        self.bounds = compute_content_bounds(&self.markers, |m| !hidden.contains(&m.name), padding);
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Queue a pointer event for the next [`update`](Self::update).
    pub fn push_pointer(&mut self, event: PointerEvent) {
        self.pointer.push(event);
    }

    /// Direct access to the pointer queue for hosts that forward raw callbacks.
    pub fn pointer_mut(&mut self) -> &mut PointerQueue {
        &mut self.pointer
    }

    /// Advance one frame: apply queued pointer events, then animations.
    pub fn update(&mut self, dt: f32) {
        let events: Vec<PointerEvent> = self.pointer.drain().collect();
        for event in events {
            self.handle_pointer(event);
        }
        self.focus.tick(dt, &mut self.camera, self.viewport);
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(local) => {
                if self.focus.cancel() {
                    log::debug!("Drag started; focus animation cancelled");
                }
                // A later scroll must not pull the camera back to the old body.
                if let Some(name) = self.selected.take() {
                    log::debug!("Drag started; deselected '{name}'");
                }
                self.drag.begin_drag(local, self.camera.pan_offset());
            }
            PointerEvent::Move(local) => {
                if let Some(session) = self.drag.session().copied()
                    && let Some(proposed) = self.drag.proposed_pan(local)
                {
                    let pan = self.clamp_pan(proposed, session.start_pan_offset);
                    self.camera.set_pan_offset(pan);
                }
            }
            PointerEvent::Up => {
                self.drag.end_drag();
            }
            PointerEvent::Scroll(lines) => self.scroll_zoom(lines),
        }
    }

    /// Keep the zoomed content overhanging the viewport by `safe_margin`.
    ///
    /// A focus animation can leave the pan outside that range; the range is
    /// widened to include the pan the drag started from.
    fn clamp_pan(&self, proposed: Vec2, start: Vec2) -> Vec2 {
        if self.bounds.is_degenerate() {
            return proposed;
        }
        // Zoom-only extents. The tilt shear moves content in y by up to
        // `tilt * x * zoom`, so the y limits are approximate.
        let zoom = self.camera.zoom();
        let content_origin = self.bounds.min * zoom;
        let top_left = clamp_canvas_from_start(
            proposed + content_origin,
            start + content_origin,
            self.bounds.size() * zoom,
            self.viewport,
            self.config.safe_margin,
        );
        top_left - content_origin
    }

    fn scroll_zoom(&mut self, lines: f32) {
        let step = self.config.zoom_step;
        let proposed = self.camera.zoom() + lines * step;
        let zoom = snap_zoom_to_steps(proposed, step, self.camera.min_zoom(), self.camera.max_zoom());
        self.camera.zoom_about(self.viewport * 0.5, zoom);
        log::trace!("Scroll {lines:+} -> zoom {zoom}");

        if let Some(center) = self.selected_marker().map(MarkerRect::center) {
            self.focus
                .focus_on(&self.camera, FocusRequest::center_only(center));
        }
    }

    /// Select the body called `name`.
    pub fn select(&mut self, name: &str) -> SelectionOutcome {
        let Some(center) = self.marker(name).map(MarkerRect::center) else {
            log::debug!("Select '{name}': no such marker");
            return SelectionOutcome::NotFound;
        };
        if self.selected.as_deref() == Some(name) {
            return SelectionOutcome::Activated;
        }
        self.selected = Some(name.to_string());
        self.focus.focus_on(
            &self.camera,
            FocusRequest::center_and_zoom(center, self.config.focus_zoom),
        );
        log::debug!("Focusing '{name}' at {center:?}");
        SelectionOutcome::Focused
    }

    /// Drop the selection and stop any focus animation where it is.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.focus.cancel();
    }

    /// Topmost active marker under a view-space point.
    pub fn marker_at(&self, view_point: Vec2) -> Option<&MarkerRect> {
        let p = self.camera.view_to_layout(view_point);
        self.markers
            .iter()
            .rev()
            .filter(|m| !self.hidden.contains(&m.name))
            .find(|m| Box2::from_top_left_size(m.top_left, m.size).contains_point(p))
    }

    /// Active marker called `name`.
    pub fn marker(&self, name: &str) -> Option<&MarkerRect> {
        self.markers
            .iter()
            .find(|m| m.name == name && !self.hidden.contains(name))
    }

    fn selected_marker(&self) -> Option<&MarkerRect> {
        self.selected.as_deref().and_then(|name| self.marker(name))
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn transform(&self) -> MapTransform {
        self.camera.transform()
    }

    pub fn phase(&self) -> AnimationPhase {
        self.focus.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn content_bounds(&self) -> Box2 {
        self.bounds
    }

    pub fn markers(&self) -> &[MarkerRect] {
        &self.markers
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}
