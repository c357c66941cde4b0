use crate::adapters::deliverable;
use crate::domain::model::Point;
use crate::domain::ports::Diagnostics;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// Variable the emitted dataset literal is assigned to.
pub const DATASET_VARIABLE: &str = "zipcodes";

/// A coordinate in the emission convention. Field order is the reverse of
/// the ingest order; the serializer writes keys in declaration order, which
/// is what performs the axis swap.
#[derive(Debug, Serialize)]
struct LatLng {
    lat: String,
    lng: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
}

impl From<Point> for LatLng {
    fn from(point: Point) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
            alt: point.alt,
        }
    }
}

#[derive(Debug, Serialize)]
struct DatasetEntry {
    name: String,
    center: LatLng,
    poly: Vec<LatLng>,
}

/// Streams the deliverable file as a script-ready dataset literal: one keyed
/// entry per row, center and boundary points reordered into
/// `(lat, lng[, alt])`. An absent boundary is emitted as an empty point
/// list, not an omitted field. Returns the number of entries written.
pub fn emit_dataset<W, D>(path: &str, out: &mut W, diag: &D) -> Result<usize>
where
    W: Write,
    D: Diagnostics,
{
    write!(out, "var {} = {{", DATASET_VARIABLE)?;

    let mut emitted = 0usize;
    deliverable::read_rows(path, diag, |row| {
        let entry = DatasetEntry {
            name: row.name,
            center: LatLng::from(row.center),
            poly: row
                .poly
                .unwrap_or_default()
                .into_iter()
                .map(LatLng::from)
                .collect(),
        };
        if emitted > 0 {
            write!(out, ",")?;
        }
        write!(out, "\n\"{}\": {}", row.code, serde_json::to_string(&entry)?)?;
        emitted += 1;
        Ok(())
    })?;

    writeln!(out, "\n}};")?;
    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    struct NullDiagnostics;

    impl Diagnostics for NullDiagnostics {
        fn debug(&self, _message: &str) {}
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
    }

    #[test]
    fn test_axis_order_is_swapped_on_emission() {
        let point = Point::new("10", "20");
        let json = serde_json::to_string(&LatLng::from(point)).unwrap();
        assert_eq!(json, r#"{"lat":"20","lng":"10"}"#);
    }

    #[test]
    fn test_altitude_survives_the_swap() {
        let point = Point::with_alt("10", "20", "30");
        let json = serde_json::to_string(&LatLng::from(point)).unwrap();
        assert_eq!(json, r#"{"lat":"20","lng":"10","alt":"30"}"#);
    }

    #[test]
    fn test_emits_the_dataset_literal_exactly() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a,b,NAME,ZIP,LAT,c,d,e,f,LNG,g,KML").unwrap();
        writeln!(
            file,
            "x,y,Factoria,98006,47.55,a,b,c,d,-122.14,e,\
             \"<Polygon><coordinates>-122.15,47.56 -122.13,47.54</coordinates></Polygon>\""
        )
        .unwrap();
        writeln!(file, "x,y,Crossroads,98007,47.61,a,b,c,d,-122.12,e,").unwrap();

        let mut out = Vec::new();
        let emitted =
            emit_dataset(file.path().to_str().unwrap(), &mut out, &NullDiagnostics).unwrap();

        assert_eq!(emitted, 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "var zipcodes = {\n\
             \"98006\": {\"name\":\"Factoria\",\"center\":{\"lat\":\"47.55\",\"lng\":\"-122.14\"},\
             \"poly\":[{\"lat\":\"47.56\",\"lng\":\"-122.15\"},{\"lat\":\"47.54\",\"lng\":\"-122.13\"}]},\n\
             \"98007\": {\"name\":\"Crossroads\",\"center\":{\"lat\":\"47.61\",\"lng\":\"-122.12\"},\"poly\":[]}\n\
             };\n"
        );
    }

    #[test]
    fn test_empty_input_emits_an_empty_literal() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a,b,NAME,ZIP,LAT,c,d,e,f,LNG,g,KML").unwrap();

        let mut out = Vec::new();
        let emitted =
            emit_dataset(file.path().to_str().unwrap(), &mut out, &NullDiagnostics).unwrap();

        assert_eq!(emitted, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "var zipcodes = {\n};\n");
    }
}
