//! CSV export of analysis results
//!
//! Writes the matrix itself as plain comma-separated rows, optionally
//! preceded by `#`-comment lines carrying the analysis summary.
//! Without the metadata header the output is exactly the format
//! [`load_matrix_csv`](crate::input::load_matrix_csv) reads back, so a
//! rational matrix survives an export/import round trip unchanged.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use det_rs::output::export::{CsvExporter, Exporter};
//!
//! CsvExporter::default().export(&record, Path::new("magic.csv"))?;
//! ```
//!
//! **Output** (`magic.csv`):
//! ```csv
//! 2,7,6
//! 9,5,1
//! 4,3,8
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! let exporter = CsvExporter::new(CsvConfig::default().with_metadata());
//! exporter.export(&record, Path::new("magic.csv"))?;
//! ```
//!
//! **Output** (`magic.csv`):
//! ```csv
//! # Matrix Analysis
//! # Generated: 2026-08-29T15:30:00Z
//! # Method: LU Decomposition
//! # Determinant: -360
//! # Trace: 15
//! # Rank: 3
//! # Singular: false
//! # Symmetric: false
//! #
//! 2,7,6
//! 9,5,1
//! 4,3,8
//! ```

use super::{ExportRecord, Exporter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// =============================================================================
// Errors
// =============================================================================

/// Errors a CSV export can produce
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    /// File creation or write failure
    #[error("CSV write failed: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use det_rs::output::export::CsvConfig;
///
/// // European CSV: semicolon-delimited, with the summary header
/// let config = CsvConfig::default().delimiter(';').with_metadata();
/// assert!(config.include_metadata);
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Include `#`-comment header lines with the analysis summary
    /// (default: false, which keeps the file re-loadable)
    pub include_metadata: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            include_metadata: false,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: enable the analysis-summary header
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV format implementation of [`Exporter`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    /// Create an exporter with an explicit configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export(&self, record: &ExportRecord<'_>, path: &Path) -> Result<(), Self::Error> {
        let mut out = BufWriter::new(File::create(path)?);

        // ====== Metadata Header ======

        if self.config.include_metadata {
            let analysis = record.analysis;
            writeln!(out, "# Matrix Analysis")?;
            writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;
            writeln!(out, "# Method: {}", record.method)?;
            writeln!(out, "# Determinant: {}", analysis.determinant)?;
            writeln!(out, "# Trace: {}", analysis.trace)?;
            writeln!(out, "# Rank: {}", analysis.rank)?;
            writeln!(out, "# Singular: {}", analysis.is_singular)?;
            writeln!(out, "# Symmetric: {}", analysis.is_symmetric)?;
            writeln!(out, "#")?;
        }

        // ====== Matrix Rows ======

        let delimiter = self.config.delimiter.to_string();
        for row in record.matrix.rows() {
            let cells: Vec<String> = row.iter().map(|entry| entry.to_string()).collect();
            writeln!(out, "{}", cells.join(&delimiter))?;
        }

        out.flush()?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::input::load_matrix_csv;
    use crate::matrix::Matrix;
    use std::fs;

    fn magic() -> Matrix {
        Matrix::from_integers(&[vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]).unwrap()
    }

    fn record_for<'a>(
        matrix: &'a Matrix,
        analysis: &'a crate::analysis::MatrixAnalysis,
    ) -> ExportRecord<'a> {
        ExportRecord {
            matrix,
            analysis,
            method: "LU Decomposition",
            steps: &[],
        }
    }

    #[test]
    fn test_csv_plain_rows() {
        let matrix = magic();
        let analysis = analyze(&matrix).unwrap();
        let path = std::env::temp_dir().join("det_rs_export_plain.csv");

        CsvExporter::default()
            .export(&record_for(&matrix, &analysis), &path)
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(text, "2,7,6\n9,5,1\n4,3,8\n");
    }

    #[test]
    fn test_csv_metadata_header() {
        let matrix = magic();
        let analysis = analyze(&matrix).unwrap();
        let path = std::env::temp_dir().join("det_rs_export_meta.csv");

        CsvExporter::new(CsvConfig::default().with_metadata())
            .export(&record_for(&matrix, &analysis), &path)
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(text.contains("# Determinant: -360"));
        assert!(text.contains("# Trace: 15"));
        assert!(text.contains("# Rank: 3"));
        assert!(text.ends_with("4,3,8\n"));
    }

    #[test]
    fn test_csv_round_trip_keeps_rationals_exact() {
        let matrix = crate::gallery::hilbert_3().matrix;
        let analysis = analyze(&matrix).unwrap();
        let path = std::env::temp_dir().join("det_rs_export_roundtrip.csv");

        CsvExporter::default()
            .export(&record_for(&matrix, &analysis), &path)
            .unwrap();

        let reloaded = load_matrix_csv(&path, true).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(*reloaded.at(2, 2), *matrix.at(2, 2));
    }

    #[test]
    fn test_csv_custom_delimiter() {
        let matrix = magic();
        let analysis = analyze(&matrix).unwrap();
        let path = std::env::temp_dir().join("det_rs_export_semicolon.csv");

        CsvExporter::new(CsvConfig::default().delimiter(';'))
            .export(&record_for(&matrix, &analysis), &path)
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(text.starts_with("2;7;6\n"));
    }

    #[test]
    fn test_csv_bad_path_is_io_error() {
        let matrix = magic();
        let analysis = analyze(&matrix).unwrap();
        let result = CsvExporter::default().export(
            &record_for(&matrix, &analysis),
            Path::new("/no/such/dir/out.csv"),
        );
        assert!(matches!(result, Err(CsvError::Io(_))));
    }
}
