use crate::domain::model::{Point, Polygon};
use crate::domain::ports::Diagnostics;

/// Parses a whitespace-separated sequence of `lng,lat[,alt]` tuples into an
/// ordered point list. A tuple with any other field count is skipped with a
/// warning; the same tolerance applies to both boundary-ingest paths.
pub fn parse_coordinates<D: Diagnostics>(text: &str, diag: &D) -> Polygon {
    let mut points = Polygon::new();
    for token in text.split_whitespace() {
        let fields: Vec<&str> = token.split(',').collect();
        match fields.as_slice() {
            [lng, lat] => points.push(Point::new(lng, lat)),
            [lng, lat, alt] => points.push(Point::with_alt(lng, lat, alt)),
            _ => diag.warn(&format!("skipping malformed coordinate tuple '{}'", token)),
        }
    }
    points
}
