use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One boundary vertex or center coordinate. Values keep the exact decimal
/// text found in the source; nothing in the pipeline converts them to floats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub lng: String,
    pub lat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Point {
    pub fn new(lng: &str, lat: &str) -> Self {
        Self {
            lng: lng.to_string(),
            lat: lat.to_string(),
            alt: None,
        }
    }

    pub fn with_alt(lng: &str, lat: &str, alt: &str) -> Self {
        Self {
            lng: lng.to_string(),
            lat: lat.to_string(),
            alt: Some(alt.to_string()),
        }
    }
}

/// Ordered boundary ring. An absent boundary is `Option<Polygon>::None`,
/// which is not the same thing as a ring with zero vertices.
pub type Polygon = Vec<Point>;

/// The unified per-code record merged from all three sources. Serialization
/// skips fields no source supplied, so the persisted blob carries exactly
/// what is known about the code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poly: Option<Polygon>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub undeliverable: bool,
}

impl GeoRecord {
    pub fn has_poly(&self) -> bool {
        self.poly.is_some()
    }
}

/// Key-indexed store of records, one per postal code. Codes are opaque
/// 5-character identifiers; iteration is deterministic (lexicographic).
///
/// The contract the readers rely on: insert-if-absent, else fetch-and-mutate.
/// `contains` before `upsert` tells a reader whether it is seeing a code for
/// the first time.
#[derive(Debug, Default)]
pub struct RecordSet {
    records: BTreeMap<String, GeoRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    /// Inserts a default record if the code is absent, then hands back the
    /// stored record for mutation.
    pub fn upsert(&mut self, code: &str) -> &mut GeoRecord {
        self.records.entry(code.to_string()).or_default()
    }

    pub fn get(&self, code: &str) -> Option<&GeoRecord> {
        self.records.get(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &GeoRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Output of the merge phase: the finished record set plus the codes that
/// tripped the `has_poly == undeliverable` consistency check.
#[derive(Debug)]
pub struct MergeOutcome {
    pub records: RecordSet,
    pub anomalies: Vec<String>,
}

/// One failed store write, kept with its reason instead of being swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub code: String,
    pub reason: String,
}

/// Aggregated result of the load phase. A non-empty `failed` list means the
/// run completed best-effort and those codes are missing from the store.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub written: usize,
    pub failed: Vec<WriteFailure>,
}
