//! Boundary with external collaborators: bar sources and the ticker universe.

pub mod json_source;
pub mod market_data;
pub mod universe;

pub use json_source::JsonDirBarSource;
pub use market_data::{BarSource, InMemoryBarSource, SourceError};
