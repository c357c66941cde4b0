pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::sqlite::SqliteStore;
pub use crate::config::{BuildConfig, Cli, Command, EmitConfig};
pub use crate::core::emit::emit_dataset;
pub use crate::core::{etl::EtlEngine, pipeline::ZipPipeline};
pub use crate::domain::model::{GeoRecord, LoadSummary, Point, Polygon, RecordSet};
pub use crate::utils::error::{EtlError, Result};
pub use crate::utils::logger::TracingDiagnostics;
