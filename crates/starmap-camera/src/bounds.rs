//! Bounding box of the placed markers.

use glam::Vec2;
use starmap_math::Box2;
use starmap_orbit::MarkerRect;

use crate::camera::MapTransform;

/// Union of every active marker's rectangle, grown by `padding` on each side.
///
/// Returns [`Box2::ZERO`] when no marker is active; callers treat that as
/// "nothing to center on".
pub fn compute_content_bounds<F>(markers: &[MarkerRect], is_active: F, padding: Vec2) -> Box2
where
    F: Fn(&MarkerRect) -> bool,
{
    let mut bounds: Option<Box2> = None;
    for marker in markers {
        if !is_active(marker) {
            log::debug!("Skipping inactive marker '{}' in content bounds", marker.name);
            continue;
        }
        let rect = Box2::from_top_left_size(marker.top_left, marker.size);
        bounds = Some(match bounds {
            Some(b) => b.union(&rect),
            None => rect,
        });
    }
    bounds.map_or(Box2::ZERO, |b| b.expand_by(padding))
}

/// Pan that puts the center of `bounds` at the center of the viewport.
///
/// A degenerate box centers the layout origin instead.
pub fn centered_pan(bounds: &Box2, viewport: Vec2, transform: &MapTransform) -> Vec2 {
    let focus = if bounds.is_degenerate() {
        Vec2::ZERO
    } else {
        bounds.center()
    };
    viewport * 0.5 - transform.canvas * focus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::apply_zoom_and_tilt;

    fn marker(name: &str, center: Vec2, size: f32) -> MarkerRect {
        MarkerRect::centered(name, center, size)
    }

    #[test]
    fn test_bounds_cover_all_markers() {
        let markers = vec![
            marker("a", Vec2::new(-100.0, 0.0), 20.0),
            marker("b", Vec2::new(200.0, 50.0), 40.0),
        ];
        let b = compute_content_bounds(&markers, |_| true, Vec2::ZERO);
        assert_eq!(b.min, Vec2::new(-110.0, -10.0));
        assert_eq!(b.max, Vec2::new(220.0, 70.0));
    }

    #[test]
    fn test_bounds_apply_padding() {
        let markers = vec![marker("a", Vec2::ZERO, 10.0)];
        let b = compute_content_bounds(&markers, |_| true, Vec2::new(400.0, 300.0));
        assert_eq!(b.min, Vec2::new(-405.0, -305.0));
        assert_eq!(b.max, Vec2::new(405.0, 305.0));
    }

    #[test]
    fn test_inactive_markers_skipped() {
        let markers = vec![
            marker("a", Vec2::ZERO, 10.0),
            marker("hidden", Vec2::new(5000.0, 5000.0), 10.0),
        ];
        let b = compute_content_bounds(&markers, |m| m.name != "hidden", Vec2::ZERO);
        assert_eq!(b.max, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_no_markers_gives_zero_box() {
        let b = compute_content_bounds(&[], |_| true, Vec2::new(400.0, 300.0));
        assert_eq!(b, Box2::ZERO);
        assert!(b.is_degenerate());
        let all_hidden = compute_content_bounds(&[marker("x", Vec2::ONE, 4.0)], |_| false, Vec2::ONE);
        assert_eq!(all_hidden, Box2::ZERO);
    }

    #[test]
    fn test_centered_pan_puts_center_mid_viewport() {
        let bounds = Box2::new(Vec2::new(-100.0, -50.0), Vec2::new(300.0, 150.0));
        let t = apply_zoom_and_tilt(2.0, 0.2);
        let viewport = Vec2::new(1600.0, 900.0);
        let pan = centered_pan(&bounds, viewport, &t);
        let on_screen = pan + t.canvas * bounds.center();
        assert!((on_screen - viewport * 0.5).length() < 1e-3);
    }

    #[test]
    fn test_centered_pan_degenerate_centers_origin() {
        let pan = centered_pan(&Box2::ZERO, Vec2::new(800.0, 600.0), &MapTransform::IDENTITY);
        assert_eq!(pan, Vec2::new(400.0, 300.0));
    }
}
