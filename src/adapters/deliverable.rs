use crate::core::boundary::{extract_boundary, plain_coordinates};
use crate::domain::model::{Point, Polygon, RecordSet};
use crate::domain::ports::Diagnostics;
use crate::utils::error::Result;
use roxmltree::Document;

// Fixed column positions in the deliverable file; there is no header-name
// lookup.
const NAME_COL: usize = 2;
const CODE_COL: usize = 3;
const LAT_COL: usize = 4;
const LNG_COL: usize = 9;
const BOUNDARY_COL: usize = 11;

/// Literal value of the code column on the header row.
const HEADER_SENTINEL: &str = "ZIP";

/// One data row of the deliverable file with its geometry parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliverableRecord {
    pub code: String,
    pub name: String,
    pub center: Point,
    pub poly: Option<Polygon>,
}

struct RawRow<'a> {
    code: &'a str,
    name: &'a str,
    lat: &'a str,
    lng: &'a str,
    boundary: &'a str,
}

fn split_row(row: &csv::StringRecord) -> Option<RawRow<'_>> {
    Some(RawRow {
        code: row.get(CODE_COL)?,
        name: row.get(NAME_COL)?,
        lat: row.get(LAT_COL)?,
        lng: row.get(LNG_COL)?,
        boundary: row.get(BOUNDARY_COL)?,
    })
}

fn reader_for(path: &str) -> Result<csv::Reader<std::fs::File>> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?)
}

/// Parses an embedded boundary fragment as an independent markup document.
/// Failure costs the row its geometry, never the run.
fn parse_fragment<D: Diagnostics>(fragment: &str, code: &str, diag: &D) -> Option<Polygon> {
    match Document::parse(fragment) {
        Ok(doc) => extract_boundary(doc.root(), plain_coordinates, diag),
        Err(err) => {
            diag.warn(&format!(
                "unparsable boundary fragment for zip code {}, keeping name and center: {}",
                code, err
            ));
            None
        }
    }
}

/// Merges the deliverable file into the record set. This source is
/// authoritative for name and center whenever it has a row for a code;
/// geometry is taken only from the row that introduces the code.
pub fn merge_deliverable<D: Diagnostics>(
    path: &str,
    records: &mut RecordSet,
    diag: &D,
) -> Result<()> {
    diag.info(&format!("parsing the deliverable csv {}", path));

    for row in reader_for(path)?.into_records() {
        let row = row?;
        let Some(raw) = split_row(&row) else {
            diag.warn(&format!("skipping short row with {} columns", row.len()));
            continue;
        };
        if raw.code == HEADER_SENTINEL {
            continue;
        }

        if !records.contains(raw.code) {
            diag.info(&format!("no boundary data for zip code {}", raw.code));
            let poly = if raw.boundary.is_empty() {
                None
            } else {
                parse_fragment(raw.boundary, raw.code, diag)
            };
            let record = records.upsert(raw.code);
            if let Some(poly) = poly {
                record.poly = Some(poly);
            }
        }

        let record = records.upsert(raw.code);
        record.name = Some(raw.name.to_string());
        record.center = Some(Point::new(raw.lng, raw.lat));
    }

    Ok(())
}

/// Streams every data row to `visit`, geometry parsed eagerly. This is the
/// single-source pass behind the emission pipeline; it never merges.
pub fn read_rows<D, F>(path: &str, diag: &D, mut visit: F) -> Result<()>
where
    D: Diagnostics,
    F: FnMut(DeliverableRecord) -> Result<()>,
{
    for row in reader_for(path)?.into_records() {
        let row = row?;
        let Some(raw) = split_row(&row) else {
            diag.warn(&format!("skipping short row with {} columns", row.len()));
            continue;
        };
        if raw.code == HEADER_SENTINEL {
            continue;
        }

        let poly = if raw.boundary.is_empty() {
            None
        } else {
            parse_fragment(raw.boundary, raw.code, diag)
        };
        visit(DeliverableRecord {
            code: raw.code.to_string(),
            name: raw.name.to_string(),
            center: Point::new(raw.lng, raw.lat),
            poly,
        })?;
    }

    Ok(())
}
