use crate::domain::model::{GeoRecord, LoadSummary, MergeOutcome, RecordSet};
use crate::utils::error::Result;

/// Diagnostics sink injected into every component that reports data-quality
/// events, instead of components reaching for process-wide logger state.
/// The production implementation forwards to `tracing`; tests collect.
pub trait Diagnostics {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

pub trait ConfigProvider {
    fn kml_path(&self) -> &str;
    fn deliverable_path(&self) -> &str;
    fn undeliverable_path(&self) -> &str;
    fn database_path(&self) -> &str;
    fn json_dir(&self) -> Option<&str>;
}

/// Three-stage pipeline contract driven by the ETL engine.
pub trait Pipeline {
    fn extract(&self) -> Result<RecordSet>;
    fn transform(&self, records: RecordSet) -> Result<MergeOutcome>;
    fn load(&self, outcome: &MergeOutcome) -> Result<LoadSummary>;
}

/// Durable store for merged records. `write` returns a typed per-row result
/// so the caller can aggregate failures into a summary while continuing.
pub trait GeoStore {
    fn ensure_schema(&self) -> Result<()>;
    fn write(&self, code: &str, record: &GeoRecord) -> Result<()>;
}
