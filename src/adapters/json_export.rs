use crate::domain::model::RecordSet;
use crate::domain::ports::Diagnostics;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::path::Path;

/// Writes one `<code>.json` file per record into `dir`. Per-file failures
/// are logged and skipped; returns how many files were written.
pub fn export_records<D: Diagnostics>(dir: &str, records: &RecordSet, diag: &D) -> Result<usize> {
    diag.info(&format!("creating JSON files in directory {}", dir));
    fs::create_dir_all(dir)?;

    let mut written = 0;
    for (code, record) in records.iter() {
        let path = Path::new(dir).join(format!("{}.json", code));
        let result = serde_json::to_vec(record)
            .map_err(EtlError::from)
            .and_then(|data| fs::write(&path, data).map_err(EtlError::from));
        match result {
            Ok(()) => written += 1,
            Err(err) => diag.warn(&format!("failed to export zip code {}: {}", code, err)),
        }
    }

    Ok(written)
}
