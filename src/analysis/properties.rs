//! Whole-matrix property analysis
//!
//! One call computes the summary a caller usually wants together:
//! determinant (LU path), trace, estimated rank, singularity, and
//! symmetry. Spectral quantities (eigenvalues, condition number,
//! orthogonality checks) are outside this crate's scope.

use crate::analysis::{estimate_rank, AnalysisOptions, DeterminantMethod, LuMethod};
use crate::matrix::{Entry, Matrix};

// =================================================================================================
// Analysis Report
// =================================================================================================

/// Summary of a matrix's basic properties
///
/// Produced by [`analyze`] / [`analyze_with`]. The determinant and
/// trace keep the matrix's numeric domain: analyzing a rational matrix
/// yields exact rational values.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixAnalysis {
    /// Determinant, computed by LU decomposition
    pub determinant: Entry,
    /// Sum of the diagonal entries
    pub trace: Entry,
    /// Pivot-count rank estimate (see [`estimate_rank`])
    pub rank: usize,
    /// True when the determinant is (near-)zero
    pub is_singular: bool,
    /// True when the matrix equals its transpose, entry for entry
    pub is_symmetric: bool,
}

/// Analyze a matrix with default options
///
/// # Example
///
/// ```rust
/// use det_rs::matrix::{Matrix, Entry};
/// use det_rs::analysis::analyze;
///
/// let magic = Matrix::from_integers(&[vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]).unwrap();
/// let report = analyze(&magic).unwrap();
///
/// assert_eq!(report.determinant, Entry::integer(-360));
/// assert_eq!(report.trace, Entry::integer(15));
/// assert_eq!(report.rank, 3);
/// assert!(!report.is_singular);
/// assert!(!report.is_symmetric);
/// ```
pub fn analyze(matrix: &Matrix) -> Result<MatrixAnalysis, String> {
    analyze_with(matrix, &AnalysisOptions::new())
}

/// Analyze a matrix with explicit options
///
/// The tolerance governs both the LU pivot test and the singularity
/// classification of the final determinant. Rational matrices compare
/// exactly regardless of the tolerance.
pub fn analyze_with(
    matrix: &Matrix,
    options: &AnalysisOptions,
) -> Result<MatrixAnalysis, String> {
    options.validate()?;

    let determinant = LuMethod::new().determinant(matrix, options)?.value;
    let is_singular = determinant.is_near_zero(options.tolerance);

    Ok(MatrixAnalysis {
        trace: matrix.trace(),
        rank: estimate_rank(matrix, options)?,
        is_symmetric: matrix.is_symmetric(),
        determinant,
        is_singular,
    })
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Domain;

    // ====== Reference Matrices ======

    #[test]
    fn test_analyze_identity() {
        let report = analyze(&Matrix::identity(4, Domain::Rational)).unwrap();
        assert_eq!(report.determinant, Entry::integer(1));
        assert_eq!(report.trace, Entry::integer(4));
        assert_eq!(report.rank, 4);
        assert!(!report.is_singular);
        assert!(report.is_symmetric);
    }

    #[test]
    fn test_analyze_magic_square() {
        let magic =
            Matrix::from_integers(&[vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]).unwrap();
        let report = analyze(&magic).unwrap();

        assert_eq!(report.determinant, Entry::integer(-360));
        assert_eq!(report.trace, Entry::integer(15));
        assert_eq!(report.rank, 3);
        assert!(!report.is_singular);
        assert!(!report.is_symmetric);
    }

    #[test]
    fn test_analyze_hilbert_stays_rational() {
        let hilbert = Matrix::from_rows(vec![
            vec![
                Entry::integer(1),
                Entry::rational(1, 2).unwrap(),
                Entry::rational(1, 3).unwrap(),
            ],
            vec![
                Entry::rational(1, 2).unwrap(),
                Entry::rational(1, 3).unwrap(),
                Entry::rational(1, 4).unwrap(),
            ],
            vec![
                Entry::rational(1, 3).unwrap(),
                Entry::rational(1, 4).unwrap(),
                Entry::rational(1, 5).unwrap(),
            ],
        ])
        .unwrap();

        let report = analyze(&hilbert).unwrap();
        assert_eq!(report.determinant, Entry::rational(1, 2160).unwrap());
        assert_eq!(report.trace, Entry::rational(23, 15).unwrap());
        assert_eq!(report.determinant.domain(), Domain::Rational);
        assert!(!report.is_singular);
        assert!(report.is_symmetric);
    }

    // ====== Singularity ======

    #[test]
    fn test_analyze_singular_matrix() {
        let ones = Matrix::from_integers(&[vec![1, 1], vec![1, 1]]).unwrap();
        let report = analyze(&ones).unwrap();

        assert_eq!(report.determinant, Entry::integer(0));
        assert!(report.is_singular);
        assert_eq!(report.rank, 1);
        assert!(report.is_symmetric);
    }

    #[test]
    fn test_analyze_tiny_rational_det_is_not_singular() {
        // Exact 1/10^15 on the diagonal: singular only if truly zero
        let tiny = Entry::rational(1, 1_000_000_000_000_000).unwrap();
        let m = Matrix::from_rows(vec![
            vec![Entry::integer(1), Entry::integer(0)],
            vec![Entry::integer(0), tiny],
        ])
        .unwrap();
        let report = analyze(&m).unwrap();
        assert!(!report.is_singular);
    }

    #[test]
    fn test_analyze_tiny_float_det_is_singular() {
        let m = Matrix::from_floats(&[vec![1e-7, 0.0], vec![0.0, 1e-7]]).unwrap();
        // det = 1e-14, below the default tolerance once multiplied out
        let report = analyze(&m).unwrap();
        assert!(report.is_singular);
    }

    // ====== Options ======

    #[test]
    fn test_analyze_with_rejects_bad_options() {
        let m = Matrix::identity(2, Domain::Float);
        let bad = AnalysisOptions::new().tolerance(f64::NAN);
        assert!(analyze_with(&m, &bad).is_err());
    }
}
