use crate::core::boundary::{extract_boundary, namespaced_coordinates};
use crate::domain::model::RecordSet;
use crate::domain::ports::Diagnostics;
use crate::utils::error::Result;
use roxmltree::Document;
use std::fs;

pub const KML_NAMESPACE: &str = "http://earth.google.com/kml/2.0";

/// Seeds the record set from the full boundary map, one record per
/// placemark. Identifiers ending in the placeholder pairs `HH`/`XX` are not
/// postal codes and never reach the output. A document that fails to parse
/// aborts the run; this source has no redundancy.
pub fn seed_from_kml<D: Diagnostics>(path: &str, records: &mut RecordSet, diag: &D) -> Result<()> {
    diag.info(&format!("parsing the boundary map {}", path));
    let text = fs::read_to_string(path)?;
    let doc = Document::parse(&text)?;

    let placemarks: Vec<_> = doc
        .root()
        .descendants()
        .filter(|n| {
            n.is_element()
                && n.tag_name().name() == "Placemark"
                && n.tag_name().namespace() == Some(KML_NAMESPACE)
        })
        .collect();
    diag.info(&format!(
        "found {} entries in the boundary map",
        placemarks.len()
    ));

    for entry in placemarks {
        let name = entry
            .children()
            .find(|n| {
                n.is_element()
                    && n.tag_name().name() == "name"
                    && n.tag_name().namespace() == Some(KML_NAMESPACE)
            })
            .and_then(|n| n.text());
        let Some(code) = name else {
            diag.warn("skipping placemark without a name element");
            continue;
        };

        if code.ends_with("HH") || code.ends_with("XX") {
            diag.debug(&format!("ignoring placeholder entry {}", code));
            continue;
        }

        diag.debug(&format!("parsing entry for zip code {}", code));
        let poly = extract_boundary(entry, namespaced_coordinates(KML_NAMESPACE), diag);
        let record = records.upsert(code);
        if let Some(poly) = poly {
            record.poly = Some(poly);
        }
    }

    Ok(())
}
