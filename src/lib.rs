pub mod analysis;
pub mod config;
pub mod console;
pub mod error;
pub mod extract;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod visualization;

#[cfg(feature = "web")]
pub mod web;

pub use config::AnalyzerConfig;
pub use error::GridError;
pub use models::{CountryObservation, CountryRecord, Panel, StatusLabel};
pub use pipeline::build_panel;
