//! Initial phase angles for bodies that arrive without one.
//!
//! Phases are assigned once and then stay on the body, so rebuilding a layout
//! never moves anything. A seeded source derives each phase from the universe
//! seed and the body name alone, which keeps placement identical across runs
//! and independent of list order.

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

use crate::OrbitBody;

/// Where missing phase angles come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseSource {
    /// Derived from a universe seed and the body name.
    Seeded(u64),
    /// Drawn from the thread RNG. Different every run.
    Random,
}

impl PhaseSource {
    /// Seeded when a seed is configured, random otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(PhaseSource::Random, PhaseSource::Seeded)
    }
}

/// Deterministic phase in `[0, 360)` for `body_key` under `seed`.
///
/// `FxHasher` has no per-process random state, unlike std's `DefaultHasher`,
/// so the derived seed is stable between runs.
pub fn initial_phase_deg(seed: u64, body_key: &str) -> f64 {
    let mut hasher = FxHasher::default();
    seed.hash(&mut hasher);
    body_key.hash(&mut hasher);
    let mut rng = ChaCha8Rng::seed_from_u64(hasher.finish());
    rng.random_range(0.0..360.0)
}

/// Fill `phase_angle_deg` on every body that lacks one.
///
/// Returns the number of bodies that received a phase. Bodies that already
/// carry a phase are left untouched.
pub fn assign_missing_phases(bodies: &mut [OrbitBody], source: PhaseSource) -> usize {
    let mut assigned = 0;
    for body in bodies.iter_mut().filter(|b| b.phase_angle_deg.is_none()) {
        let phase = match source {
            PhaseSource::Seeded(seed) => initial_phase_deg(seed, &body.name),
            PhaseSource::Random => rand::rng().random_range(0.0..360.0),
        };
        body.phase_angle_deg = Some(phase);
        assigned += 1;
    }
    if assigned > 0 {
        log::debug!("Assigned {assigned} initial phase angle(s) ({source:?})");
    }
    assigned
}
