//! Eased camera animations: center on a body, zoom to it, tilt in on load.
//!
//! Everything advances from [`FocusAnimator::tick`] with the frame's elapsed
//! seconds; there are no timers. Two independent tracks run:
//!
//! - the **focus track**: `Centering` then `Zooming` (or `Centering` alone),
//!   cancelled by a drag or replaced by a new selection, and
//! - the **tilt track**: `TiltingIn`, started once when the view opens and
//!   never interrupted.

use glam::Vec2;
use starmap_config::CameraConfig;
use starmap_math::{EasingFunction, Lerp};

use crate::camera::CameraState;

/// What the camera is currently animating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Centering,
    Zooming,
    TiltingIn,
}

/// Interpolation from one value to another over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
}

impl<T: Lerp> Tween<T> {
    /// A smoothstep tween. A non-positive duration finishes on the first
    /// evaluation.
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
            easing: EasingFunction::EaseInOut,
        }
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&self) -> T {
        self.from
    }

    pub fn target(&self) -> T {
        self.to
    }

    /// Move the end point without restarting progress.
    pub fn retarget(&mut self, to: T) {
        self.to = to;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if !(self.duration > 0.0) {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current value. Exactly the target once finished.
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp_to(self.to, self.easing.apply(self.progress()))
    }

    /// Advance by `dt` seconds and return the new value. Negative or
    /// non-finite steps count as zero.
    pub fn advance(&mut self, dt: f32) -> T {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.value()
    }
}

/// Where a focus animation should end up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusRequest {
    /// Layout-space point to bring to the viewport center.
    pub center: Vec2,
    /// Zoom to reach after centering; `None` centers only.
    pub zoom: Option<f32>,
}

impl FocusRequest {
    pub fn center_only(center: Vec2) -> Self {
        Self { center, zoom: None }
    }

    pub fn center_and_zoom(center: Vec2, zoom: f32) -> Self {
        Self {
            center,
            zoom: Some(zoom),
        }
    }
}

#[derive(Clone, Debug, Default)]
enum FocusTrack {
    #[default]
    Idle,
    Centering {
        pan: Tween<Vec2>,
        request: FocusRequest,
    },
    Zooming {
        zoom: Tween<f32>,
        center: Vec2,
    },
}

/// Phased focus transitions plus the load-time tilt.
#[derive(Clone, Debug)]
pub struct FocusAnimator {
    track: FocusTrack,
    tilt: Option<Tween<f32>>,
    center_duration: f32,
    zoom_duration: f32,
}

impl FocusAnimator {
    pub fn new(center_duration: f32, zoom_duration: f32) -> Self {
        Self {
            track: FocusTrack::Idle,
            tilt: None,
            center_duration,
            zoom_duration,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.center_duration, config.zoom_duration)
    }

    /// Reset the camera tilt to zero and ease it to `target_tilt`.
    pub fn start_tilt_in(&mut self, camera: &mut CameraState, target_tilt: f32, duration: f32) {
        camera.set_tilt(0.0);
        self.tilt = Some(Tween::new(0.0, target_tilt, duration));
        log::debug!("Tilt-in to {target_tilt} over {duration}s");
    }

    /// Start centering on `request.center`, replacing any focus animation in
    /// progress. The camera keeps whatever values the old animation reached.
    pub fn focus_on(&mut self, camera: &CameraState, request: FocusRequest) {
        if self.cancel() {
            log::debug!("Focus animation replaced by new request");
        }
        self.track = FocusTrack::Centering {
            pan: Tween::new(camera.pan_offset(), camera.pan_offset(), self.center_duration),
            request,
        };
    }

    /// Stop the focus track without snapping. The tilt track keeps running.
    /// Returns whether anything was cancelled.
    pub fn cancel(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.track), FocusTrack::Idle)
    }

    /// Focus-track phase when one is running, else `TiltingIn` while the tilt
    /// runs, else `Idle`.
    pub fn phase(&self) -> AnimationPhase {
        match self.track {
            FocusTrack::Centering { .. } => AnimationPhase::Centering,
            FocusTrack::Zooming { .. } => AnimationPhase::Zooming,
            FocusTrack::Idle if self.tilt.is_some() => AnimationPhase::TiltingIn,
            FocusTrack::Idle => AnimationPhase::Idle,
        }
    }

    pub fn is_tilting(&self) -> bool {
        self.tilt.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.phase() != AnimationPhase::Idle
    }

    /// Advance both tracks by `dt` seconds and write the results into
    /// `camera`. `viewport` is the view size; focused bodies are kept at its
    /// center.
    pub fn tick(&mut self, dt: f32, camera: &mut CameraState, viewport: Vec2) {
        if let Some(tilt) = self.tilt.as_mut() {
            camera.set_tilt(tilt.advance(dt));
            if tilt.is_finished() {
                self.tilt = None;
            }
        }

        let view_center = viewport * 0.5;
        let next = match &mut self.track {
            FocusTrack::Idle => None,
            FocusTrack::Centering { pan, request } => {
                // Follow the target while the tilt is still changing.
                pan.retarget(camera.pan_placing(request.center, view_center));
                camera.set_pan_offset(pan.advance(dt));
                if !pan.is_finished() {
                    None
                } else if let Some(target) = request.zoom {
                    let target = target.clamp(camera.min_zoom(), camera.max_zoom());
                    Some(FocusTrack::Zooming {
                        zoom: Tween::new(camera.zoom(), target, self.zoom_duration),
                        center: request.center,
                    })
                } else {
                    Some(FocusTrack::Idle)
                }
            }
            FocusTrack::Zooming { zoom, center } => {
                camera.set_zoom(zoom.advance(dt));
                camera.set_pan_offset(camera.pan_placing(*center, view_center));
                zoom.is_finished().then_some(FocusTrack::Idle)
            }
        };

        if let Some(next) = next {
            self.track = next;
        }
    }
}

impl Default for FocusAnimator {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
