pub mod boundary;
pub mod coords;
pub mod emit;
pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{GeoRecord, LoadSummary, MergeOutcome, Point, Polygon, RecordSet};
pub use crate::domain::ports::{ConfigProvider, Diagnostics, GeoStore, Pipeline};
pub use crate::utils::error::Result;
