//! Pure orbital-element to screen-space conversions.
//!
//! Every function is deterministic and never fails: degenerate input
//! (eccentricity out of range, zero orbits, empty body sets, inverted size
//! domains) falls back to a safe value instead.

use glam::Vec2;
use starmap_config::{SizeScale, SizeScaleTable};

use crate::{OrbitBody, SizeClass};

/// Inclination boost used when the caller does not configure one.
pub const DEFAULT_INCLINATION_AMPLIFICATION: f64 = 2.0;

/// Largest visual inclination. Keeps `cos(incl)` away from zero so an
/// amplified orbit never collapses into a horizontal line.
pub const MAX_VISUAL_INCLINATION_DEG: f64 = 80.0;

/// Perihelion and aphelion of an orbit with the given mean radius.
///
/// Returns `(mean, mean)` when `eccentricity` is outside `[0, 1)`.
pub fn compute_orbit_extremes(mean_orbit_km: f64, eccentricity: f64) -> (f64, f64) {
    if !(0.0..1.0).contains(&eccentricity) {
        return (mean_orbit_km, mean_orbit_km);
    }
    (
        mean_orbit_km * (1.0 - eccentricity),
        mean_orbit_km * (1.0 + eccentricity),
    )
}

/// Screen offset of a body at `angle_deg` on a circular orbit of `radius_px`,
/// viewed so that `inclination_deg` squashes the orbit vertically.
///
/// The angle wraps modulo 360, negative angles included.
pub fn get_2d_orbit_position(radius_px: f32, angle_deg: f64, inclination_deg: f64) -> Vec2 {
    let theta = angle_deg.rem_euclid(360.0).to_radians();
    let r = f64::from(radius_px);
    let x = theta.cos() * r;
    let y = theta.sin() * r * inclination_deg.to_radians().cos();
    Vec2::new(x as f32, y as f32)
}

/// Perceptual boost so small inclinations stay distinguishable on screen.
///
/// Returns `inclination_deg * factor` clamped to
/// `±MAX_VISUAL_INCLINATION_DEG` (80°). NaN maps to 0. Only meaningful as
/// input to [`get_2d_orbit_position`].
pub fn amplify_inclination(inclination_deg: f64, factor: f64) -> f64 {
    let boosted = inclination_deg * factor;
    if boosted.is_nan() {
        return 0.0;
    }
    boosted.clamp(-MAX_VISUAL_INCLINATION_DEG, MAX_VISUAL_INCLINATION_DEG)
}

/// Log-scale radius to pixel mapping within one size domain.
///
/// The radius is clamped into the domain before taking logarithms, so zero,
/// negative, and NaN radii map to `min_px`. An unusable domain also yields
/// `min_px`.
pub fn map_log_radius_to_size(radius_km: f64, scale: &SizeScale) -> f32 {
    let (lo, hi) = (scale.min_radius_km, scale.max_radius_km);
    if !(lo > 0.0 && hi > lo) {
        return scale.min_px;
    }

    let r = if radius_km.is_nan() {
        lo
    } else {
        radius_km.clamp(lo, hi)
    };
    let t = ((r.log10() - lo.log10()) / (hi.log10() - lo.log10())).clamp(0.0, 1.0);

    let power = if scale.perceptual_power > 0.0 {
        scale.perceptual_power
    } else {
        1.0
    };
    let t = t.powf(power) as f32;

    let px = scale.min_px + (scale.max_px - scale.min_px) * t;
    px.clamp(scale.min_px.min(scale.max_px), scale.max_px.max(scale.min_px))
}

/// On-screen marker size for a body of `radius_km` in the given size class.
pub fn get_ui_size_from_radius(radius_km: f64, size_class: SizeClass, table: &SizeScaleTable) -> f32 {
    map_log_radius_to_size(radius_km, size_class.scale(table))
}

/// Kilometres per pixel such that the widest orbit spans `max_pixel_radius`.
///
/// Falls back to `1.0` for an empty set, all-zero orbits, or a non-positive
/// pixel radius.
pub fn dynamic_orbit_scale<'a>(
    bodies: impl IntoIterator<Item = &'a OrbitBody>,
    max_pixel_radius: f32,
) -> f64 {
    let max_orbit = bodies
        .into_iter()
        .map(|b| b.orbit_radius_km)
        .filter(|r| r.is_finite())
        .fold(0.0_f64, f64::max);

    if max_orbit <= 0.0 || !(max_pixel_radius > 0.0) {
        return 1.0;
    }
    max_orbit / f64::from(max_pixel_radius)
}

/// Ellipse drawn for one body's orbit, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitRing {
    /// Mean orbit radius.
    pub radius_px: f32,
    /// Half the perihelion + aphelion span.
    pub semi_major_px: f32,
    /// `a * sqrt(1 - e²)`.
    pub semi_minor_px: f32,
    /// Amplified inclination the ring is drawn with.
    pub inclination_deg: f32,
}

/// Ring geometry for `body` at `km_per_px`.
pub fn orbit_ring(body: &OrbitBody, km_per_px: f64, amplification: f64) -> OrbitRing {
    let km_per_px = if km_per_px > 0.0 { km_per_px } else { 1.0 };
    let (perihelion, aphelion) = compute_orbit_extremes(body.orbit_radius_km, body.eccentricity);
    let semi_major = (perihelion + aphelion) * 0.5;
    let e = if (0.0..1.0).contains(&body.eccentricity) {
        body.eccentricity
    } else {
        0.0
    };
    let semi_minor = semi_major * (1.0 - e * e).sqrt();

    OrbitRing {
        radius_px: (body.orbit_radius_km / km_per_px) as f32,
        semi_major_px: (semi_major / km_per_px) as f32,
        semi_minor_px: (semi_minor / km_per_px) as f32,
        inclination_deg: amplify_inclination(body.inclination_deg, amplification) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2, eps: f32) -> bool {
        (a - b).length() < eps
    }

    #[test]
    fn test_orbit_extremes_circular() {
        assert_eq!(compute_orbit_extremes(100.0, 0.0), (100.0, 100.0));
    }

    #[test]
    fn test_orbit_extremes_eccentric() {
        assert_eq!(compute_orbit_extremes(100.0, 0.5), (50.0, 150.0));
    }

    #[test]
    fn test_orbit_extremes_out_of_range_fails_soft() {
        assert_eq!(compute_orbit_extremes(100.0, 1.0), (100.0, 100.0));
        assert_eq!(compute_orbit_extremes(100.0, -0.1), (100.0, 100.0));
        assert_eq!(compute_orbit_extremes(100.0, f64::NAN), (100.0, 100.0));
    }

    #[test]
    fn test_orbit_position_cardinal_points() {
        assert!(approx(get_2d_orbit_position(100.0, 0.0, 0.0), Vec2::new(100.0, 0.0), 1e-4));
        assert!(approx(get_2d_orbit_position(100.0, 90.0, 0.0), Vec2::new(0.0, 100.0), 1e-4));
        assert!(approx(get_2d_orbit_position(100.0, 180.0, 0.0), Vec2::new(-100.0, 0.0), 1e-4));
    }

    #[test]
    fn test_orbit_position_inclination_compresses_y_only() {
        let p = get_2d_orbit_position(100.0, 90.0, 60.0);
        assert!(approx(p, Vec2::new(0.0, 50.0), 1e-4));
        let q = get_2d_orbit_position(100.0, 0.0, 60.0);
        assert!(approx(q, Vec2::new(100.0, 0.0), 1e-4));
    }

    #[test]
    fn test_orbit_position_wraps_angle() {
        for &r in &[1.0_f32, 37.5, 480.0] {
            for &theta in &[-725.0, -90.0, 0.0, 13.7, 271.25, 359.9] {
                for &incl in &[0.0, 7.0, 45.0, -30.0] {
                    let a = get_2d_orbit_position(r, theta, incl);
                    let b = get_2d_orbit_position(r, theta + 360.0, incl);
                    assert!(approx(a, b, 1e-4), "r={r} theta={theta} incl={incl}");
                }
            }
        }
    }

    #[test]
    fn test_amplify_inclination() {
        assert_eq!(amplify_inclination(3.0, DEFAULT_INCLINATION_AMPLIFICATION), 6.0);
        assert_eq!(amplify_inclination(-5.0, 2.0), -10.0);
        assert_eq!(amplify_inclination(70.0, 2.0), MAX_VISUAL_INCLINATION_DEG);
        assert_eq!(amplify_inclination(-45.0, 2.0), -MAX_VISUAL_INCLINATION_DEG);
        assert_eq!(amplify_inclination(f64::NAN, 2.0), 0.0);
    }

    #[test]
    fn test_ui_size_monotonic_and_bounded() {
        let table = SizeScaleTable::default();
        for class in [SizeClass::Star, SizeClass::Planet, SizeClass::Moon] {
            let scale = class.scale(&table);
            let mut prev = f32::MIN;
            for i in 0..=200 {
                let t = f64::from(i) / 200.0;
                let r = scale.min_radius_km + (scale.max_radius_km - scale.min_radius_km) * t;
                let px = get_ui_size_from_radius(r, class, &table);
                assert!(px >= prev, "{class:?} not monotonic at r={r}");
                assert!(px >= scale.min_px && px <= scale.max_px, "{class:?} px={px}");
                prev = px;
            }
        }
    }

    #[test]
    fn test_ui_size_domain_endpoints() {
        let table = SizeScaleTable::default();
        let moon = table.moon;
        assert_eq!(get_ui_size_from_radius(moon.min_radius_km, SizeClass::Moon, &table), moon.min_px);
        assert_eq!(get_ui_size_from_radius(moon.max_radius_km, SizeClass::Moon, &table), moon.max_px);
    }

    #[test]
    fn test_ui_size_clamps_out_of_domain_radius() {
        let table = SizeScaleTable::default();
        let planet = table.planet;
        assert_eq!(get_ui_size_from_radius(0.0, SizeClass::Planet, &table), planet.min_px);
        assert_eq!(get_ui_size_from_radius(-5.0, SizeClass::Planet, &table), planet.min_px);
        assert_eq!(get_ui_size_from_radius(f64::NAN, SizeClass::Planet, &table), planet.min_px);
        assert_eq!(get_ui_size_from_radius(1e12, SizeClass::Planet, &table), planet.max_px);
    }

    #[test]
    fn test_perceptual_power_spreads_large_end() {
        let scale = SizeScale {
            min_radius_km: 1.0,
            max_radius_km: 100.0,
            min_px: 0.0,
            max_px: 100.0,
            perceptual_power: 0.5,
        };
        // log-normalized midpoint is 0.5; 0.5^0.5 ≈ 0.707
        let px = map_log_radius_to_size(10.0, &scale);
        assert!((px - 70.710_68).abs() < 1e-3, "px={px}");
    }

    #[test]
    fn test_degenerate_domain_returns_min_px() {
        let scale = SizeScale {
            min_radius_km: 50.0,
            max_radius_km: 50.0,
            min_px: 12.0,
            max_px: 30.0,
            perceptual_power: 0.7,
        };
        assert_eq!(map_log_radius_to_size(50.0, &scale), 12.0);
    }

    #[test]
    fn test_dynamic_orbit_scale_empty() {
        assert_eq!(dynamic_orbit_scale(&[] as &[OrbitBody], 480.0), 1.0);
    }

    #[test]
    fn test_dynamic_orbit_scale_single() {
        let bodies = [OrbitBody::orbiting("a", 0, 1000.0, 3000.0, SizeClass::Planet)];
        assert_eq!(dynamic_orbit_scale(&bodies, 500.0), 2.0);
    }

    #[test]
    fn test_dynamic_orbit_scale_all_zero() {
        let bodies = [
            OrbitBody::root("sun", 1.5e9, SizeClass::Star),
            OrbitBody::orbiting("b", 0, 0.0, 3000.0, SizeClass::Planet),
        ];
        assert_eq!(dynamic_orbit_scale(&bodies, 480.0), 1.0);
    }

    #[test]
    fn test_dynamic_orbit_scale_uses_widest_orbit() {
        let bodies = [
            OrbitBody::orbiting("inner", 0, 4.8e7, 2_440.0, SizeClass::Planet),
            OrbitBody::orbiting("outer", 0, 4.8e9, 24_622.0, SizeClass::Planet),
        ];
        assert_eq!(dynamic_orbit_scale(&bodies, 480.0), 1.0e7);
    }

    #[test]
    fn test_orbit_ring_axes() {
        let body = OrbitBody::orbiting("p", 0, 1000.0, 3000.0, SizeClass::Planet)
            .with_eccentricity(0.6)
            .with_inclination(4.0);
        let ring = orbit_ring(&body, 2.0, 2.0);
        assert_eq!(ring.radius_px, 500.0);
        assert_eq!(ring.semi_major_px, 500.0);
        assert!((ring.semi_minor_px - 400.0).abs() < 1e-3);
        assert_eq!(ring.inclination_deg, 8.0);
    }
}
