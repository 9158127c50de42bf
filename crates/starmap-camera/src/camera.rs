//! Pan / zoom / tilt state of one map view and the canvas transform derived
//! from it.
//!
//! A layout-space point `p` lands in the view at `pan + canvas · p`, where
//! `canvas = scale(zoom) · shear_y(-tilt)`. Markers are additionally sheared
//! by half the tilt around their own center, so they lean with the map
//! without looking flattened.

use glam::{Mat2, Vec2};
use starmap_config::CameraConfig;

/// Shear that offsets `y` proportionally to `x`: `(x, y) -> (x, y + k·x)`.
fn shear_y(k: f32) -> Mat2 {
    Mat2::from_cols(Vec2::new(1.0, k), Vec2::Y)
}

/// Render transform for a zoom/tilt pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapTransform {
    pub zoom: f32,
    pub tilt: f32,
    /// Applied to the whole canvas (layout space → view space, before pan).
    pub canvas: Mat2,
    /// Applied to each marker around its own center.
    pub marker: Mat2,
}

impl MapTransform {
    pub const IDENTITY: MapTransform = MapTransform {
        zoom: 1.0,
        tilt: 0.0,
        canvas: Mat2::IDENTITY,
        marker: Mat2::IDENTITY,
    };
}

impl Default for MapTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Derive the canvas and marker transforms for `zoom` and `tilt`.
///
/// Pure: the same inputs always give the same transform, so it can be
/// re-derived whenever either value changes.
pub fn apply_zoom_and_tilt(zoom: f32, tilt: f32) -> MapTransform {
    MapTransform {
        zoom,
        tilt,
        canvas: Mat2::from_diagonal(Vec2::splat(zoom)) * shear_y(-tilt),
        marker: shear_y(-tilt * 0.5),
    }
}

/// Clamp `zoom` into `[min, max]` and round it to the nearest multiple of
/// `step`.
///
/// A non-positive or non-finite step degrades to a plain clamp. NaN zoom maps
/// to `min`.
pub fn snap_zoom_to_steps(zoom: f32, step: f32, min: f32, max: f32) -> f32 {
    let (min, max) = (min.min(max), max.max(min));
    if zoom.is_nan() {
        return min;
    }
    let clamped = zoom.clamp(min, max);
    if !(step > 0.0) || !step.is_finite() {
        return clamped;
    }
    ((clamped / step).round() * step).clamp(min, max)
}

/// Pan, zoom and tilt of one map view.
///
/// Zoom never leaves `[min_zoom, max_zoom]`: every setter clamps.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    pan_offset: Vec2,
    zoom: f32,
    tilt: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl CameraState {
    /// Camera at the origin with zoom 1 (clamped into the range) and no tilt.
    pub fn new(min_zoom: f32, max_zoom: f32) -> Self {
        let (min_zoom, max_zoom) = (min_zoom.min(max_zoom), max_zoom.max(min_zoom));
        Self {
            pan_offset: Vec2::ZERO,
            zoom: 1.0_f32.clamp(min_zoom, max_zoom),
            tilt: 0.0,
            min_zoom,
            max_zoom,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.min_zoom, config.max_zoom)
    }

    pub fn pan_offset(&self) -> Vec2 {
        self.pan_offset
    }

    /// Non-finite offsets are ignored.
    pub fn set_pan_offset(&mut self, pan: Vec2) {
        if pan.is_finite() {
            self.pan_offset = pan;
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Store `proposed` clamped into the zoom range. NaN keeps the current zoom.
    pub fn set_zoom(&mut self, proposed: f32) {
        if proposed.is_nan() {
            return;
        }
        self.zoom = proposed.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn set_tilt(&mut self, tilt: f32) {
        if tilt.is_finite() {
            self.tilt = tilt;
        }
    }

    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    /// Current canvas and marker transforms.
    pub fn transform(&self) -> MapTransform {
        apply_zoom_and_tilt(self.zoom, self.tilt)
    }

    /// Layout space → view space.
    pub fn layout_to_view(&self, p: Vec2) -> Vec2 {
        self.pan_offset + self.transform().canvas * p
    }

    /// View space → layout space. Returns the point relative to the pan
    /// without scaling if the canvas matrix is singular.
    pub fn view_to_layout(&self, p: Vec2) -> Vec2 {
        let canvas = self.transform().canvas;
        let local = p - self.pan_offset;
        if canvas.determinant().abs() <= f32::EPSILON {
            return local;
        }
        canvas.inverse() * local
    }

    /// Pan that puts layout point `p` at view position `view_point`.
    pub fn pan_placing(&self, p: Vec2, view_point: Vec2) -> Vec2 {
        view_point - self.transform().canvas * p
    }

    /// Zoom to `proposed` (clamped) keeping the layout point under
    /// `anchor_view` fixed on screen.
    pub fn zoom_about(&mut self, anchor_view: Vec2, proposed: f32) {
        let anchored = self.view_to_layout(anchor_view);
        self.set_zoom(proposed);
        self.pan_offset = self.pan_placing(anchored, anchor_view);
    }
}
