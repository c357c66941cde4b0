use crate::domain::model::LoadSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<LoadSummary> {
        tracing::info!("starting the merge run");

        let records = self.pipeline.extract()?;
        tracing::info!("extracted {} records", records.len());

        let outcome = self.pipeline.transform(records)?;
        if !outcome.anomalies.is_empty() {
            tracing::info!(
                "{} records where special == has_poly",
                outcome.anomalies.len()
            );
        }

        let summary = self.pipeline.load(&outcome)?;
        tracing::info!(
            "stored {} records, {} failed",
            summary.written,
            summary.failed.len()
        );

        Ok(summary)
    }
}
