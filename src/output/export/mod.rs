//! Export module for analysis results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export
//! format. Each format is an independent implementation in its own
//! sub-module: adding a new format means adding a file, without ever
//! modifying existing code.
//!
//! # Available formats
//!
//! | Format | Module   |
//! |--------|----------|
//! | CSV    | [`csv`]  |
//! | JSON   | [`json`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use det_rs::output::export::{CsvExporter, Exporter, ExportRecord};
//!
//! let exporter = CsvExporter::default();
//! exporter.export(&record, Path::new("magic.csv"))?;
//! ```

pub mod csv;
pub mod json;

// Re-export the most commonly used types at the module level so users
// can write:
//   use det_rs::output::export::{CsvExporter, JsonExporter, ExportRecord};
// instead of the full sub-module path.
pub use csv::{CsvConfig, CsvError, CsvExporter};
pub use json::{JsonError, JsonExporter};

use crate::analysis::MatrixAnalysis;
use crate::matrix::Matrix;
use std::path::Path;

/// Everything an export format may want to write about one analysis run
///
/// Borrowed views only; building a record copies nothing.
#[derive(Debug, Clone, Copy)]
pub struct ExportRecord<'a> {
    /// The analyzed matrix
    pub matrix: &'a Matrix,
    /// Property summary produced by [`analyze`](crate::analysis::analyze)
    pub analysis: &'a MatrixAnalysis,
    /// Name of the determinant method that produced the value
    pub method: &'a str,
    /// Ordered derivation lines; empty when step recording was off
    pub steps: &'a [String],
}

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type. This
/// avoids systematic boxing (`Box<dyn Error>`) and allows the caller
/// to react precisely based on the error type.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Writes one analysis record to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid, the directory does not
    /// exist, or the format cannot represent the record.
    fn export(&self, record: &ExportRecord<'_>, path: &Path) -> Result<(), Self::Error>;
}
