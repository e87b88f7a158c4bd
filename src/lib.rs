#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Exploration session configuration.
pub mod config;
/// Centralized constants: column names, cleaning codes, units, CLI defaults.
pub mod constants;
/// Cleaning and unit conversion helpers.
pub mod conversions;
/// Typed survey records and field access.
pub mod data;
/// Reusable example runners shared by the demo binaries.
pub mod example_apps;
/// Respondent-to-record index.
pub mod index;
/// Record source traits and built-in sources.
pub mod source;
/// Materialized record tables and selections.
pub mod table;
/// Input transports used by sources (filesystem today).
pub mod transport;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::ExploreConfig;
pub use data::{FieldAccess, FieldValue, Keyed, PregnancyRecord, RespondentRecord};
pub use errors::{IndexError, SurveyError};
pub use index::RecordIndex;
pub use source::{
    InMemorySource, JsonLinesSource, JsonLinesSourceConfig, RecordSource, materialize,
};
pub use table::{DerivedColumn, RecordTable};
pub use types::{CaseId, ColumnName, PathString, RecordPosition, SourceId};
