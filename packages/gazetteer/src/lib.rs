#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static gazetteer of Ghanaian administrative boundaries.
//!
//! This is a bounding-box approximation, not real administrative polygon
//! data: each entry is a lon/lat box around a district, and a point is
//! attributed to the FIRST entry in table order whose box contains it.
//! Boxes overlap, so the table order is part of the behavior; reordering
//! entries changes which district wins in the overlap. Points outside
//! every box fall through to a coarse longitude/latitude decision tree
//! that always produces a district/region pair.
//!
//! Swapping this for true point-in-polygon containment against real
//! boundary geometry would change classifications near district edges and
//! must be treated as a behavior change, not a fix.

use serde::Serialize;

/// A district-level entry in the gazetteer: a region/district name pair
/// and the lon/lat bounding box used to attribute centroids to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrativeBoundary {
    /// Region name (e.g. "Western").
    pub region: &'static str,
    /// District or municipal name (e.g. "Tarkwa-Nsuaem").
    pub district: &'static str,
    /// Western edge of the box, decimal degrees.
    pub lon_min: f64,
    /// Eastern edge of the box.
    pub lon_max: f64,
    /// Southern edge of the box.
    pub lat_min: f64,
    /// Northern edge of the box.
    pub lat_max: f64,
}

impl AdministrativeBoundary {
    /// Whether the point lies inside this boundary's box. Edges are
    /// inclusive on all four sides.
    #[must_use]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.lon_min && lon <= self.lon_max && lat >= self.lat_min && lat <= self.lat_max
    }
}

/// A resolved district/region pair. Always populated; the fallback path
/// guarantees non-empty names even for points far outside Ghana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBoundary {
    /// District or municipal name.
    pub district: &'static str,
    /// Region name.
    pub region: &'static str,
}

/// Gazetteer of mining districts, ordered by attribution priority.
///
/// Boxes were sized around the major active concession areas; order is
/// semantic (first match wins where boxes overlap).
pub const GHANA_GAZETTEER: &[AdministrativeBoundary] = &[
    AdministrativeBoundary {
        region: "Western",
        district: "Tarkwa-Nsuaem",
        lon_min: -2.10,
        lon_max: -1.85,
        lat_min: 5.15,
        lat_max: 5.45,
    },
    AdministrativeBoundary {
        region: "Western",
        district: "Prestea Huni-Valley",
        lon_min: -2.35,
        lon_max: -2.05,
        lat_min: 5.25,
        lat_max: 5.60,
    },
    AdministrativeBoundary {
        region: "Western",
        district: "Wassa Amenfi East",
        lon_min: -2.15,
        lon_max: -1.90,
        lat_min: 5.60,
        lat_max: 6.00,
    },
    AdministrativeBoundary {
        region: "Western North",
        district: "Bibiani-Anhwiaso-Bekwai",
        lon_min: -2.50,
        lon_max: -2.15,
        lat_min: 6.10,
        lat_max: 6.55,
    },
    AdministrativeBoundary {
        region: "Ashanti",
        district: "Obuasi Municipal",
        lon_min: -1.75,
        lon_max: -1.55,
        lat_min: 6.10,
        lat_max: 6.30,
    },
    AdministrativeBoundary {
        region: "Ashanti",
        district: "Amansie West",
        lon_min: -2.10,
        lon_max: -1.75,
        lat_min: 6.00,
        lat_max: 6.45,
    },
    AdministrativeBoundary {
        region: "Ashanti",
        district: "Asante Akim Central",
        lon_min: -1.15,
        lon_max: -0.85,
        lat_min: 6.45,
        lat_max: 6.80,
    },
    AdministrativeBoundary {
        region: "Eastern",
        district: "Abuakwa South",
        lon_min: -0.70,
        lon_max: -0.40,
        lat_min: 6.00,
        lat_max: 6.35,
    },
    AdministrativeBoundary {
        region: "Central",
        district: "Upper Denkyira East",
        lon_min: -1.80,
        lon_max: -1.55,
        lat_min: 5.70,
        lat_max: 6.05,
    },
    AdministrativeBoundary {
        region: "Ahafo",
        district: "Asutifi North",
        lon_min: -2.65,
        lon_max: -2.30,
        lat_min: 6.85,
        lat_max: 7.20,
    },
    AdministrativeBoundary {
        region: "Savannah",
        district: "Bole",
        lon_min: -2.60,
        lon_max: -2.20,
        lat_min: 8.85,
        lat_max: 9.25,
    },
    AdministrativeBoundary {
        region: "Greater Accra",
        district: "Accra Metropolitan",
        lon_min: -0.35,
        lon_max: 0.00,
        lat_min: 5.50,
        lat_max: 5.75,
    },
];

/// Linear first-match-wins scan of an arbitrary gazetteer slice.
#[must_use]
pub fn first_match(
    gazetteer: &[AdministrativeBoundary],
    lon: f64,
    lat: f64,
) -> Option<&AdministrativeBoundary> {
    gazetteer.iter().find(|entry| entry.contains(lon, lat))
}

/// Coarse decision tree for points outside every gazetteer box.
///
/// Thresholds mirror the original cadastre heuristics: far west defaults
/// to the Western mining belt, the far north to Tamale, everything else
/// to the Obuasi area. Never returns empty names.
#[must_use]
pub fn fallback(lon: f64, lat: f64) -> ResolvedBoundary {
    if lon < -2.0 {
        ResolvedBoundary {
            district: "Tarkwa-Nsuaem",
            region: "Western",
        }
    } else if lat > 9.0 {
        ResolvedBoundary {
            district: "Tamale Metropolitan",
            region: "Northern",
        }
    } else {
        ResolvedBoundary {
            district: "Obuasi Municipal",
            region: "Ashanti",
        }
    }
}

/// Resolves a centroid against the built-in gazetteer, falling back to
/// the threshold heuristics when no box matches.
#[must_use]
pub fn resolve(lon: f64, lat: f64) -> ResolvedBoundary {
    first_match(GHANA_GAZETTEER, lon, lat).map_or_else(
        || {
            let resolved = fallback(lon, lat);
            log::debug!(
                "no gazetteer box contains ({lon}, {lat}); falling back to {}/{}",
                resolved.district,
                resolved.region
            );
            resolved
        },
        |entry| ResolvedBoundary {
            district: entry.district,
            region: entry.region,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tarkwa_point_resolves_to_tarkwa() {
        let resolved = resolve(-1.98, 5.3067);
        assert_eq!(resolved.district, "Tarkwa-Nsuaem");
        assert_eq!(resolved.region, "Western");
    }

    #[test]
    fn obuasi_point_resolves_to_obuasi() {
        let resolved = resolve(-1.66, 6.2);
        assert_eq!(resolved.district, "Obuasi Municipal");
        assert_eq!(resolved.region, "Ashanti");
    }

    #[test]
    fn first_match_wins_in_overlap() {
        const OVERLAPPING: &[AdministrativeBoundary] = &[
            AdministrativeBoundary {
                region: "First",
                district: "First District",
                lon_min: 0.0,
                lon_max: 2.0,
                lat_min: 0.0,
                lat_max: 2.0,
            },
            AdministrativeBoundary {
                region: "Second",
                district: "Second District",
                lon_min: 1.0,
                lon_max: 3.0,
                lat_min: 1.0,
                lat_max: 3.0,
            },
        ];

        // (1.5, 1.5) is inside both boxes; table order decides.
        let hit = first_match(OVERLAPPING, 1.5, 1.5).unwrap();
        assert_eq!(hit.district, "First District");

        // Outside the first box, the scan continues.
        let hit = first_match(OVERLAPPING, 2.5, 2.5).unwrap();
        assert_eq!(hit.district, "Second District");
    }

    #[test]
    fn box_edges_are_inclusive() {
        let entry = &GHANA_GAZETTEER[0];
        assert!(entry.contains(entry.lon_min, entry.lat_min));
        assert!(entry.contains(entry.lon_max, entry.lat_max));
        assert!(!entry.contains(entry.lon_max + 1e-9, entry.lat_max));
    }

    #[test]
    fn far_outside_point_still_resolves() {
        let resolved = resolve(10.0, 10.0);
        assert!(!resolved.district.is_empty());
        assert!(!resolved.region.is_empty());
        assert_eq!(resolved.region, "Northern");
    }

    #[test]
    fn fallback_checks_longitude_before_latitude() {
        // West of -2.0 AND north of 9.0: the longitude branch wins.
        assert_eq!(fallback(-3.0, 9.5).region, "Western");
        assert_eq!(fallback(0.0, 9.5).region, "Northern");
        assert_eq!(fallback(0.0, 6.0).region, "Ashanti");
    }

    #[test]
    fn gazetteer_names_are_non_empty() {
        for entry in GHANA_GAZETTEER {
            assert!(!entry.district.is_empty());
            assert!(!entry.region.is_empty());
            assert!(entry.lon_min <= entry.lon_max);
            assert!(entry.lat_min <= entry.lat_max);
        }
    }
}
