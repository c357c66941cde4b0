use crate::adapters::{deliverable, json_export, kml, undeliverable};
use crate::domain::model::{LoadSummary, MergeOutcome, RecordSet, WriteFailure};
use crate::domain::ports::{ConfigProvider, Diagnostics, GeoStore, Pipeline};
use crate::utils::error::Result;

/// The merge pipeline: three source passes in fixed order into one record
/// set, a consistency check, and a best-effort bulk load.
pub struct ZipPipeline<C, S, D> {
    config: C,
    store: S,
    diag: D,
}

impl<C: ConfigProvider, S: GeoStore, D: Diagnostics> ZipPipeline<C, S, D> {
    pub fn new(config: C, store: S, diag: D) -> Self {
        Self {
            config,
            store,
            diag,
        }
    }
}

impl<C: ConfigProvider, S: GeoStore, D: Diagnostics> Pipeline for ZipPipeline<C, S, D> {
    fn extract(&self) -> Result<RecordSet> {
        let mut records = RecordSet::new();
        kml::seed_from_kml(self.config.kml_path(), &mut records, &self.diag)?;
        deliverable::merge_deliverable(self.config.deliverable_path(), &mut records, &self.diag)?;
        undeliverable::merge_undeliverable(
            self.config.undeliverable_path(),
            &mut records,
            &self.diag,
        )?;
        Ok(records)
    }

    fn transform(&self, records: RecordSet) -> Result<MergeOutcome> {
        let mut anomalies = Vec::new();
        for (code, record) in records.iter() {
            // a well-formed record has exactly one of "has boundary" /
            // "marked undeliverable"; agreement is a data-quality signal,
            // not an error
            if record.has_poly() == record.undeliverable {
                self.diag
                    .info(&format!("special == has_poly for zip code {}", code));
                anomalies.push(code.clone());
            }
        }
        Ok(MergeOutcome { records, anomalies })
    }

    fn load(&self, outcome: &MergeOutcome) -> Result<LoadSummary> {
        self.store.ensure_schema()?;

        let mut summary = LoadSummary::default();
        for (code, record) in outcome.records.iter() {
            match self.store.write(code, record) {
                Ok(()) => summary.written += 1,
                Err(err) => {
                    self.diag
                        .warn(&format!("failed to store zip code {}: {}", code, err));
                    summary.failed.push(WriteFailure {
                        code: code.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        if let Some(dir) = self.config.json_dir() {
            let exported = json_export::export_records(dir, &outcome.records, &self.diag)?;
            self.diag.info(&format!("exported {} JSON files", exported));
        }

        Ok(summary)
    }
}
