//! CSV matrix loading
//!
//! Reads a square matrix from a plain comma-separated file: one row
//! per line, blank lines and blank cells ignored. In exact mode cells must be integers
//! or `p/q` fractions; otherwise any float literal is accepted.
//!
//! ```text
//! 1, 1/2, 1/3
//! 1/2, 1/3, 1/4
//! 1/3, 1/4, 1/5
//! ```

use crate::matrix::{Entry, Matrix};
use std::fs;
use std::path::Path;

/// Load a square matrix from a CSV file
///
/// `exact` selects the rational parser (`"1/2"`, `"-3"`); without it,
/// cells parse as f64. Errors carry the file path and, for a bad cell,
/// the 1-based row and column.
pub fn load_matrix_csv(path: &Path, exact: bool) -> Result<Matrix, String> {
    // ====== Step 1: Read ======

    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;

    // ====== Step 2: Parse Cells ======

    let mut rows: Vec<Vec<Entry>> = Vec::new();
    for (line_index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut row = Vec::new();
        // Blank cells (stray or trailing delimiters) are skipped
        let cells = line
            .split(',')
            .map(str::trim)
            .filter(|cell| !cell.is_empty());
        for (col_index, cell) in cells.enumerate() {
            let entry = Entry::parse(cell, exact).map_err(|e| {
                format!(
                    "'{}' row {}, column {}: {}",
                    path.display(),
                    line_index + 1,
                    col_index + 1,
                    e
                )
            })?;
            row.push(entry);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(format!("'{}' contains no matrix rows", path.display()));
    }

    // ====== Step 3: Assemble ======

    Matrix::from_rows(rows).map_err(|e| format!("'{}': {}", path.display(), e))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Domain;
    use std::io::Write;

    fn temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_float_csv() {
        let path = temp_csv("det_rs_float.csv", "1.0, 2.0\n3.0, 4.5\n");
        let m = load_matrix_csv(&path, false).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(m.size(), 2);
        assert_eq!(m.domain(), Domain::Float);
        assert_eq!(*m.at(1, 1), Entry::float(4.5));
    }

    #[test]
    fn test_load_exact_csv_with_fractions() {
        let path = temp_csv("det_rs_exact.csv", "1, 1/2\n1/2, 1/3\n");
        let m = load_matrix_csv(&path, true).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(m.domain(), Domain::Rational);
        assert_eq!(*m.at(0, 1), Entry::rational(1, 2).unwrap());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let path = temp_csv("det_rs_blank.csv", "\n1, 2\n\n3, 4\n\n");
        let m = load_matrix_csv(&path, true).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(m.size(), 2);
    }

    #[test]
    fn test_trailing_commas_are_tolerated() {
        let path = temp_csv("det_rs_trailing.csv", "1, 2,\n3, 4,\n");
        let m = load_matrix_csv(&path, true).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(m.size(), 2);
        assert_eq!(*m.at(1, 1), Entry::integer(4));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let path = temp_csv("det_rs_ragged.csv", "1, 2, 3\n4, 5\n6, 7, 8\n");
        let result = load_matrix_csv(&path, true);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_cell_reports_position() {
        let path = temp_csv("det_rs_bad_cell.csv", "1, 2\n3, oops\n");
        let err = load_matrix_csv(&path, false).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(err.contains("row 2, column 2"), "{}", err);
    }

    #[test]
    fn test_exact_mode_rejects_decimals() {
        let path = temp_csv("det_rs_decimal.csv", "1.5, 2\n3, 4\n");
        let result = load_matrix_csv(&path, true);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_matrix_csv(Path::new("/no/such/file.csv"), false).unwrap_err();
        assert!(err.contains("Cannot read"));
    }

    #[test]
    fn test_empty_file() {
        let path = temp_csv("det_rs_empty.csv", "\n\n");
        let result = load_matrix_csv(&path, true);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
