//! JSON export of analysis results
//!
//! Serializes the full analysis report: the matrix (cells as strings,
//! so exact rationals are not mangled into floats), the property
//! summary, the method name, and any recorded derivation steps.
//!
//! **Output** (pretty-printed):
//! ```json
//! {
//!   "generated": "2026-08-29T15:30:00Z",
//!   "method": "LU Decomposition",
//!   "size": 3,
//!   "domain": "rational",
//!   "matrix": [["2", "7", "6"], ["9", "5", "1"], ["4", "3", "8"]],
//!   "determinant": "-360",
//!   "trace": "15",
//!   "rank": 3,
//!   "is_singular": false,
//!   "is_symmetric": false,
//!   "steps": []
//! }
//! ```

use super::{ExportRecord, Exporter};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// =============================================================================
// Errors
// =============================================================================

/// Errors a JSON export can produce
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// File creation or write failure
    #[error("JSON write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure
    #[error("JSON serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

// =============================================================================
// Report Shape
// =============================================================================

/// Serialized form of one analysis run
///
/// All numeric cell values are strings: JSON numbers cannot carry
/// `1/2160` exactly, and consumers that want floats can parse.
#[derive(Debug, Serialize)]
struct JsonReport {
    generated: String,
    method: String,
    size: usize,
    domain: String,
    matrix: Vec<Vec<String>>,
    determinant: String,
    trace: String,
    rank: usize,
    is_singular: bool,
    is_symmetric: bool,
    steps: Vec<String>,
}

impl JsonReport {
    fn from_record(record: &ExportRecord<'_>) -> Self {
        let analysis = record.analysis;
        Self {
            generated: chrono::Utc::now().to_rfc3339(),
            method: record.method.to_string(),
            size: record.matrix.size(),
            domain: record.matrix.domain().to_string(),
            matrix: record
                .matrix
                .rows()
                .map(|row| row.iter().map(|entry| entry.to_string()).collect())
                .collect(),
            determinant: analysis.determinant.to_string(),
            trace: analysis.trace.to_string(),
            rank: analysis.rank,
            is_singular: analysis.is_singular,
            is_symmetric: analysis.is_symmetric,
            steps: record.steps.to_vec(),
        }
    }
}

// =============================================================================
// Exporter
// =============================================================================

/// JSON format implementation of [`Exporter`]
///
/// Always pretty-prints; the reports are small and meant to be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for JsonExporter {
    type Error = JsonError;

    fn export(&self, record: &ExportRecord<'_>, path: &Path) -> Result<(), Self::Error> {
        let report = JsonReport::from_record(record);
        let out = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(out, &report)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
