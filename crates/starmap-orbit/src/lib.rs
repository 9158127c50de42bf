//! Orbital-element to screen-space layout for system and sector maps.
//!
//! Everything here is a stylized, non-to-scale 2D projection: orbit radii are
//! scaled linearly so the widest orbit fills a fixed pixel radius, inclination
//! only squashes the orbit vertically, and body sizes come from a log-scale
//! mapping per size class.

mod body;
pub mod geometry;
pub mod layout;
pub mod phase;

pub use body::{OrbitBody, SizeClass};
pub use geometry::{
    DEFAULT_INCLINATION_AMPLIFICATION, MAX_VISUAL_INCLINATION_DEG, OrbitRing, amplify_inclination,
    compute_orbit_extremes, dynamic_orbit_scale, get_2d_orbit_position, get_ui_size_from_radius,
    map_log_radius_to_size, orbit_ring,
};
pub use layout::{MarkerRect, PlacedBody, SystemLayout};
pub use phase::{PhaseSource, assign_missing_phases, initial_phase_deg};
