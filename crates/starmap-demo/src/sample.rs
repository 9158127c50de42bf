//! Built-in body lists for the headless session.

use starmap_orbit::OrbitBody;

/// A star with its planets, as the system map receives it.
const SOL_SYSTEM: &str = r#"[
    (name: "Sol", orbit_radius_km: 0.0, radius_km: 1.6e9, size_class: Star),
    (name: "Mercury", orbit_radius_km: 5.79e7, eccentricity: 0.2056, inclination_deg: 7.0,
     radius_km: 2439.7, size_class: Planet, parent_index: Some(0)),
    (name: "Venus", orbit_radius_km: 1.082e8, eccentricity: 0.0068, inclination_deg: 3.39,
     radius_km: 6051.8, size_class: Planet, parent_index: Some(0)),
    (name: "Terra", orbit_radius_km: 1.496e8, eccentricity: 0.0167,
     radius_km: 6371.0, size_class: Planet, parent_index: Some(0)),
    (name: "Mars", orbit_radius_km: 2.279e8, eccentricity: 0.0934, inclination_deg: 1.85,
     radius_km: 3389.5, size_class: Planet, parent_index: Some(0)),
    (name: "Jupiter", orbit_radius_km: 7.785e8, eccentricity: 0.0489, inclination_deg: 1.3,
     radius_km: 69911.0, size_class: Planet, parent_index: Some(0)),
    (name: "Saturn", orbit_radius_km: 1.4335e9, eccentricity: 0.0565, inclination_deg: 2.49,
     radius_km: 58232.0, size_class: Planet, parent_index: Some(0)),
]"#;

/// A planet with its moons, as the sector map receives it. The planet's own
/// orbit around its star is irrelevant here; it sits at the origin.
const JUPITER_SECTOR: &str = r#"[
    (name: "Jupiter", orbit_radius_km: 7.785e8, radius_km: 69911.0, size_class: Planet),
    (name: "Io", orbit_radius_km: 421700.0, eccentricity: 0.0041, inclination_deg: 0.05,
     radius_km: 1821.6, size_class: Moon, parent_index: Some(0)),
    (name: "Europa", orbit_radius_km: 671034.0, eccentricity: 0.009, inclination_deg: 0.47,
     radius_km: 1560.8, size_class: Moon, parent_index: Some(0)),
    (name: "Ganymede", orbit_radius_km: 1070412.0, eccentricity: 0.0013, inclination_deg: 0.2,
     radius_km: 2634.1, size_class: Moon, parent_index: Some(0)),
    (name: "Callisto", orbit_radius_km: 1882709.0, eccentricity: 0.0074, inclination_deg: 0.19,
     radius_km: 2410.3, size_class: Moon, parent_index: Some(0)),
]"#;

pub fn system_bodies() -> Result<Vec<OrbitBody>, ron::error::SpannedError> {
    ron::from_str(SOL_SYSTEM)
}

pub fn sector_bodies() -> Result<Vec<OrbitBody>, ron::error::SpannedError> {
    ron::from_str(JUPITER_SECTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_parse() {
        let system = system_bodies().unwrap();
        assert_eq!(system.len(), 7);
        assert!(system[0].parent_index.is_none());
        let sector = sector_bodies().unwrap();
        assert_eq!(sector.len(), 5);
        assert!(sector.iter().skip(1).all(|b| b.parent_index == Some(0)));
    }
}
