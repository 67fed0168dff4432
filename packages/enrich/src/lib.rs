#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry-derived field auto-calculation for concession records.
//!
//! The single shared implementation of the size/district/region
//! derivation (the original application carried four near-identical
//! copies of it in different UI components). Callers hand in a record
//! with `coordinates` populated; this crate fills `size`, `district`,
//! and `region` and leaves every other field alone. Persistence is the
//! caller's job.
//!
//! The pipeline never fails: missing or degenerate polygons produce
//! `size = 0` and the gazetteer's fallback boundary, so downstream
//! storage always receives a well-formed record. A caller that expected
//! a real polygon can treat `size == 0` as its own rejection signal.

use concession_map_concession_models::{CalculationResult, Concession};

/// Runs one calculation pass over a coordinate ring.
///
/// Deterministic and pure: the same ring always yields the same result.
#[must_use]
pub fn calculate_fields(coordinates: &[[f64; 2]]) -> CalculationResult {
    let size = concession_map_geometry::area_acres(coordinates);
    let centroid = concession_map_geometry::centroid(coordinates);
    let boundary = concession_map_gazetteer::resolve(centroid[0], centroid[1]);

    CalculationResult {
        size,
        district: boundary.district.to_owned(),
        region: boundary.region.to_owned(),
        centroid,
    }
}

/// Overwrites the derived fields of a concession from its coordinates.
///
/// `size`, `district`, and `region` are recomputed; all other fields
/// (name, owner, permit data, contact, raw attributes) pass through
/// unchanged. Returns a new record; the input is consumed, not mutated
/// in place.
#[must_use]
pub fn auto_calculate_fields(concession: Concession) -> Concession {
    let result = calculate_fields(&concession.coordinates);
    log::debug!(
        "derived fields for {}: {} acres, {}/{}",
        concession.id,
        result.size,
        result.district,
        result.region
    );

    Concession {
        size: result.size,
        district: result.district,
        region: result.region,
        ..concession
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use concession_map_concession_models::{ConcessionStatus, ContactInfo, PermitType};

    use super::*;

    /// Small triangle inside the Tarkwa-Nsuaem gazetteer box.
    const TARKWA_TRIANGLE: &[[f64; 2]] = &[[-1.99, 5.30], [-1.97, 5.30], [-1.98, 5.32]];

    fn record(coordinates: Vec<[f64; 2]>) -> Concession {
        Concession {
            id: "con-100".into(),
            name: "Bonsa River Block".into(),
            size: 0.0,
            owner: "Bonsa Mining Co".into(),
            permit_type: PermitType::MiningLease,
            permit_expiry_date: None,
            district: String::new(),
            region: String::new(),
            status: ConcessionStatus::Pending,
            coordinates,
            contact: Some(ContactInfo {
                phone: None,
                email: Some("ops@bonsa.example".into()),
                address: None,
            }),
            raw_attributes: BTreeMap::new(),
        }
    }

    #[test]
    fn triangle_fields() {
        let result = calculate_fields(TARKWA_TRIANGLE);
        // Pinned from the shoelace + mean-latitude formula.
        assert_eq!(result.size, 603.69);
        assert_eq!(result.centroid, [-1.98, 5.3067]);
        assert_eq!(result.district, "Tarkwa-Nsuaem");
        assert_eq!(result.region, "Western");
    }

    #[test]
    fn derived_fields_overwrite_placeholders() {
        let enriched = auto_calculate_fields(record(TARKWA_TRIANGLE.to_vec()));
        assert_eq!(enriched.size, 603.69);
        assert_eq!(enriched.district, "Tarkwa-Nsuaem");
        assert_eq!(enriched.region, "Western");
    }

    #[test]
    fn stale_derived_fields_are_replaced() {
        let mut stale = record(TARKWA_TRIANGLE.to_vec());
        stale.size = 9999.0;
        stale.district = "Accra Metropolitan".into();
        stale.region = "Greater Accra".into();

        let enriched = auto_calculate_fields(stale);
        assert_eq!(enriched.size, 603.69);
        assert_eq!(enriched.district, "Tarkwa-Nsuaem");
    }

    #[test]
    fn other_fields_pass_through() {
        let original = record(TARKWA_TRIANGLE.to_vec());
        let enriched = auto_calculate_fields(original.clone());

        assert_eq!(enriched.id, original.id);
        assert_eq!(enriched.name, original.name);
        assert_eq!(enriched.owner, original.owner);
        assert_eq!(enriched.permit_type, original.permit_type);
        assert_eq!(enriched.status, original.status);
        assert_eq!(enriched.contact, original.contact);
        assert_eq!(enriched.coordinates, original.coordinates);
    }

    #[test]
    fn enrichment_is_idempotent() {
        let once = auto_calculate_fields(record(TARKWA_TRIANGLE.to_vec()));
        let twice = auto_calculate_fields(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_coordinates_degrade_gracefully() {
        let enriched = auto_calculate_fields(record(Vec::new()));
        assert_eq!(enriched.size, 0.0);
        // [0, 0] sentinel centroid falls through to the default branch.
        assert!(!enriched.district.is_empty());
        assert!(!enriched.region.is_empty());
    }

    #[test]
    fn degenerate_polygon_keeps_fallback_boundary() {
        let enriched = auto_calculate_fields(record(vec![[-2.5, 5.8], [-2.4, 5.9]]));
        assert_eq!(enriched.size, 0.0);
        // Centroid of the two points is (-2.45, 5.85): outside every box,
        // west of -2.0, so the Western fallback applies.
        assert_eq!(enriched.region, "Western");
        assert_eq!(enriched.district, "Tarkwa-Nsuaem");
    }

    #[test]
    fn far_away_polygon_still_gets_a_boundary() {
        let ring = vec![[9.9, 9.9], [10.1, 9.9], [10.1, 10.1], [9.9, 10.1]];
        let enriched = auto_calculate_fields(record(ring));
        assert!(enriched.size > 0.0);
        assert_eq!(enriched.region, "Northern");
        assert_eq!(enriched.district, "Tamale Metropolitan");
    }
}
