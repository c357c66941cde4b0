use crate::domain::model::RecordSet;
use crate::domain::ports::Diagnostics;
use crate::utils::error::Result;

const CODE_COL: usize = 0;
const NAME_COL: usize = 1;

/// Literal value of the code column on the header row.
const HEADER_SENTINEL: &str = "zip";

/// Merges the undeliverable file into the record set: codes with no
/// physical delivery boundary. Creates missing codes with the
/// undeliverable flag set; always overwrites the name; never touches
/// geometry.
pub fn merge_undeliverable<D: Diagnostics>(
    path: &str,
    records: &mut RecordSet,
    diag: &D,
) -> Result<()> {
    diag.info(&format!("parsing the undeliverable csv {}", path));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    for row in reader.records() {
        let row = row?;
        let (Some(code), Some(name)) = (row.get(CODE_COL), row.get(NAME_COL)) else {
            diag.warn(&format!("skipping short row with {} columns", row.len()));
            continue;
        };
        if code == HEADER_SENTINEL {
            continue;
        }

        if !records.contains(code) {
            diag.info(&format!("no boundary data for zip code {}", code));
            records.upsert(code).undeliverable = true;
        }
        records.upsert(code).name = Some(name.to_string());
    }

    Ok(())
}
