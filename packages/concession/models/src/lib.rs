#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Mining concession record types.
//!
//! These are the canonical shapes exchanged with the persistence and UI
//! layers. `size`, `district`, and `region` are derived fields: callers
//! submit them empty (or stale) and the enrichment step overwrites them
//! from `coordinates`. Everything else passes through enrichment
//! untouched.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Lifecycle status of a concession permit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConcessionStatus {
    /// Permit granted and in force.
    Active,
    /// Application submitted, not yet granted.
    Pending,
    /// Permit past its expiry date.
    Expired,
    /// Permit suspended by the regulator.
    Suspended,
}

/// Category of mineral right, following the Minerals Commission permit
/// classes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PermitType {
    /// Large-scale extraction right.
    MiningLease,
    /// Exploration right with defined work obligations.
    ProspectingLicence,
    /// Preliminary regional search right.
    ReconnaissanceLicence,
    /// Small-scale mining licence (citizens only).
    SmallScale,
}

/// Contact details for the concession holder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Phone number, free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address, free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Postal or physical address, free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A mining concession record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concession {
    /// Stable record identifier.
    pub id: String,
    /// Concession name (e.g. "Ahafo South Pit 2").
    pub name: String,
    /// Area in acres. Derived from `coordinates`; 0 when the polygon is
    /// degenerate or missing.
    #[serde(default)]
    pub size: f64,
    /// Holder of the mineral right.
    pub owner: String,
    /// Permit class.
    pub permit_type: PermitType,
    /// Expiry date of the permit, if granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit_expiry_date: Option<NaiveDate>,
    /// Administrative district. Derived from the polygon centroid.
    #[serde(default)]
    pub district: String,
    /// Administrative region. Derived from the polygon centroid.
    #[serde(default)]
    pub region: String,
    /// Lifecycle status.
    pub status: ConcessionStatus,
    /// Boundary ring as `[lon, lat]` pairs in decimal degrees. May be
    /// explicitly closed (first vertex repeated last) or not.
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
    /// Holder contact details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    /// Source-specific attributes preserved verbatim from ingestion.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub raw_attributes: BTreeMap<String, serde_json::Value>,
}

impl Concession {
    /// Whether the permit expiry date has passed as of `today`.
    ///
    /// Records without an expiry date (pending applications) are never
    /// considered expired.
    #[must_use]
    pub fn is_permit_expired(&self, today: NaiveDate) -> bool {
        self.permit_expiry_date.is_some_and(|expiry| expiry < today)
    }
}

/// The derived fields produced by one calculation pass over a polygon.
///
/// A fresh value per invocation, tied 1:1 to its input ring; never cached
/// or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Area in acres, rounded to 2 decimal places.
    pub size: f64,
    /// Resolved administrative district.
    pub district: String,
    /// Resolved administrative region.
    pub region: String,
    /// Vertex-average centroid as `[lon, lat]`, rounded to 4 decimals.
    /// `[0.0, 0.0]` means "no data" (empty input).
    pub centroid: [f64; 2],
}
