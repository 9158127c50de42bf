//! Marker layout for one map view.
//!
//! Layout space is in pixels with the view's root body at the origin and +y
//! pointing down. Children are placed relative to their parent's center, so a
//! moon list nested under a planet lands around that planet.

use glam::Vec2;
use starmap_config::LayoutConfig;

use crate::geometry::{
    OrbitRing, amplify_inclination, dynamic_orbit_scale, get_2d_orbit_position,
    get_ui_size_from_radius, orbit_ring,
};
use crate::phase::{PhaseSource, assign_missing_phases};
use crate::OrbitBody;

/// A marker as the renderer sees it. Markers are center-anchored.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerRect {
    pub name: String,
    pub top_left: Vec2,
    pub size: Vec2,
}

impl MarkerRect {
    /// Builds a square marker around `center`.
    pub fn centered(name: impl Into<String>, center: Vec2, size_px: f32) -> Self {
        let size = Vec2::splat(size_px);
        Self {
            name: name.into(),
            top_left: center - size * 0.5,
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.top_left + self.size * 0.5
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.top_left + self.size
    }
}

/// Layout output for one body.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedBody {
    pub name: String,
    /// Index into the body list the layout was built from.
    pub index: usize,
    /// Marker center in layout space.
    pub center: Vec2,
    /// Marker edge length in pixels.
    pub size_px: f32,
    /// Orbit ellipse around the parent; `None` for the root.
    pub ring: Option<OrbitRing>,
}

/// Placed bodies of one view plus the orbit scale they were placed with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemLayout {
    bodies: Vec<PlacedBody>,
    km_per_px: f64,
}

/// How a body's parent index resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    /// The view's root: sits on the origin, no ring.
    Root,
    /// Orbits another body in the list.
    Parent(usize),
    /// Parent index was unusable; orbits the origin.
    Origin,
}

impl SystemLayout {
    /// Lay out `bodies` with `config`.
    ///
    /// Missing phase angles are assigned first (seeded from
    /// `config.phase_seed` when present) and written back into `bodies`, so a
    /// second build with the same list produces the same layout.
    pub fn build(bodies: &mut [OrbitBody], config: &LayoutConfig) -> Self {
        assign_missing_phases(bodies, PhaseSource::from_seed(config.phase_seed));

        let anchors: Vec<Anchor> = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| resolve_anchor(i, body, bodies.len()))
            .collect();

        let km_per_px = dynamic_orbit_scale(
            bodies
                .iter()
                .zip(&anchors)
                .filter(|(_, anchor)| **anchor != Anchor::Root)
                .map(|(body, _)| body),
            config.max_orbit_px,
        );

        // Offset of each body from whatever it orbits.
        let offsets: Vec<Vec2> = bodies
            .iter()
            .zip(&anchors)
            .map(|(body, anchor)| match anchor {
                Anchor::Root => Vec2::ZERO,
                Anchor::Parent(_) | Anchor::Origin => {
                    let radius_px = (body.orbit_radius_km / km_per_px) as f32;
                    let phase = body.phase_angle_deg.unwrap_or(0.0);
                    let incl = amplify_inclination(body.inclination_deg, config.inclination_amplification);
                    get_2d_orbit_position(radius_px, phase, incl)
                }
            })
            .collect();

        let placed = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let center = resolve_center(i, &anchors, &offsets, &body.name);
                let ring = (anchors[i] != Anchor::Root)
                    .then(|| orbit_ring(body, km_per_px, config.inclination_amplification));
                PlacedBody {
                    name: body.name.clone(),
                    index: i,
                    center,
                    size_px: get_ui_size_from_radius(body.radius_km, body.size_class, &config.sizes),
                    ring,
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Laid out {} bodies at {:.3e} km/px",
            placed.len(),
            km_per_px
        );

        Self {
            bodies: placed,
            km_per_px,
        }
    }

    pub fn bodies(&self) -> &[PlacedBody] {
        &self.bodies
    }

    /// Kilometres per layout pixel along orbit radii.
    pub fn km_per_px(&self) -> f64 {
        self.km_per_px
    }

    pub fn find(&self, name: &str) -> Option<&PlacedBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Center-anchored marker rectangles in body order.
    pub fn markers(&self) -> Vec<MarkerRect> {
        self.bodies
            .iter()
            .map(|b| MarkerRect::centered(b.name.clone(), b.center, b.size_px))
            .collect()
    }
}

fn resolve_anchor(index: usize, body: &OrbitBody, len: usize) -> Anchor {
    match body.parent_index {
        None => Anchor::Root,
        Some(p) if p < len && p != index => Anchor::Parent(p),
        Some(p) => {
            log::warn!(
                "Body '{}' has invalid parent index {p} (list of {len}); placing it around the origin",
                body.name
            );
            Anchor::Origin
        }
    }
}

/// Sum of offsets up the parent chain. A chain longer than the list is a
/// cycle; the body then keeps only its own offset.
fn resolve_center(index: usize, anchors: &[Anchor], offsets: &[Vec2], name: &str) -> Vec2 {
    let mut center = offsets[index];
    let mut current = anchors[index];
    for _ in 0..anchors.len() {
        match current {
            Anchor::Parent(p) => {
                center += offsets[p];
                current = anchors[p];
            }
            Anchor::Root | Anchor::Origin => return center,
        }
    }
    log::warn!("Body '{name}' has a cyclic parent chain; placing it around the origin");
    offsets[index]
}
