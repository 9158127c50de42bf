use serde::{Deserialize, Serialize};
use starmap_config::{SizeScale, SizeScaleTable};

/// Coarse body category selecting the radius-to-pixel mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Star,
    #[default]
    Planet,
    Moon,
}

impl SizeClass {
    /// The size mapping for this class.
    pub fn scale(self, table: &SizeScaleTable) -> &SizeScale {
        match self {
            SizeClass::Star => &table.star,
            SizeClass::Planet => &table.planet,
            SizeClass::Moon => &table.moon,
        }
    }
}

/// Layout inputs for one body of a map view.
///
/// Supplied by the galaxy data source. The layout only ever writes
/// `phase_angle_deg`, and only when it is `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitBody {
    /// Unique key within a view.
    pub name: String,
    /// Mean orbit radius around the parent, in km. Zero places the body on its parent.
    pub orbit_radius_km: f64,
    /// Orbit eccentricity in `[0, 1)`.
    #[serde(default)]
    pub eccentricity: f64,
    /// Orbit inclination in degrees.
    #[serde(default)]
    pub inclination_deg: f64,
    /// Position along the orbit in degrees. Assigned once when missing.
    #[serde(default)]
    pub phase_angle_deg: Option<f64>,
    /// Physical body radius in km.
    pub radius_km: f64,
    pub size_class: SizeClass,
    /// Index of the orbited body in the same list; `None` for the view's root.
    #[serde(default)]
    pub parent_index: Option<usize>,
}

impl OrbitBody {
    /// A root body (star or sector-map planet) sitting at the layout origin.
    pub fn root(name: impl Into<String>, radius_km: f64, size_class: SizeClass) -> Self {
        Self {
            name: name.into(),
            orbit_radius_km: 0.0,
            eccentricity: 0.0,
            inclination_deg: 0.0,
            phase_angle_deg: None,
            radius_km,
            size_class,
            parent_index: None,
        }
    }

    /// A body on a circular, flat orbit around `parent_index`.
    pub fn orbiting(
        name: impl Into<String>,
        parent_index: usize,
        orbit_radius_km: f64,
        radius_km: f64,
        size_class: SizeClass,
    ) -> Self {
        Self {
            orbit_radius_km,
            parent_index: Some(parent_index),
            ..Self::root(name, radius_km, size_class)
        }
    }

    pub fn with_eccentricity(mut self, eccentricity: f64) -> Self {
        self.eccentricity = eccentricity;
        self
    }

    pub fn with_inclination(mut self, inclination_deg: f64) -> Self {
        self.inclination_deg = inclination_deg;
        self
    }

    pub fn with_phase(mut self, phase_angle_deg: f64) -> Self {
        self.phase_angle_deg = Some(phase_angle_deg);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_class_selects_table_row() {
        let table = SizeScaleTable::default();
        assert_eq!(SizeClass::Moon.scale(&table), &table.moon);
        assert_eq!(SizeClass::Star.scale(&table), &table.star);
    }

    #[test]
    fn test_orbiting_builder() {
        let body = OrbitBody::orbiting("Luna", 0, 384_400.0, 1_737.0, SizeClass::Moon)
            .with_eccentricity(0.055)
            .with_inclination(5.1);
        assert_eq!(body.parent_index, Some(0));
        assert_eq!(body.phase_angle_deg, None);
        assert!((body.eccentricity - 0.055).abs() < 1e-12);
    }

    #[test]
    fn test_body_deserializes_with_defaults() {
        let body: OrbitBody = ron::from_str(
            "(name: \"Mars\", orbit_radius_km: 2.279e8, radius_km: 3389.5, size_class: Planet, parent_index: Some(0))",
        )
        .unwrap();
        assert_eq!(body.eccentricity, 0.0);
        assert_eq!(body.phase_angle_deg, None);
        assert_eq!(body.parent_index, Some(0));
    }
}
