// Adapters layer: concrete implementations for external systems (source
// files, the SQLite store, the JSON exporter).

pub mod deliverable;
pub mod json_export;
pub mod kml;
pub mod sqlite;
pub mod undeliverable;
