//! LU-decomposition determinant method
//!
//! # Mathematical Background
//!
//! Gaussian elimination with partial pivoting reduces the matrix to an
//! upper-triangular form U. Each elementary row operation
//! `R_k ← R_k − f·R_i` leaves the determinant unchanged, and each row
//! swap flips its sign, so:
//!
//! ```text
//! det(A) = (−1)^s · ∏ U[i][i]
//! ```
//!
//! where `s` is the number of row swaps performed.
//!
//! # Characteristics
//!
//! - **Cost**: O(n³), the default and authoritative determinant path
//! - **Stability**: partial pivoting (largest |candidate| in the column)
//! - **Domains**: exact in the rational domain (no rounding anywhere);
//!   float and complex use a near-zero pivot tolerance
//!
//! # Singularity short-circuit
//!
//! A near-zero pivot after the swap means the matrix is singular. The
//! method then returns the exact zero of the matrix's domain
//! immediately; elimination does not continue, and no error is raised.
//! Treating numeric singularity as a zero determinant rather than a
//! failure is part of this method's contract.
//!
//! # Example
//!
//! ```rust
//! use det_rs::matrix::{Matrix, Entry};
//! use det_rs::analysis::{AnalysisOptions, DeterminantMethod, LuMethod};
//!
//! let magic = Matrix::from_integers(&[vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]).unwrap();
//! let derivation = LuMethod::new()
//!     .determinant(&magic, &AnalysisOptions::new())
//!     .unwrap();
//! assert_eq!(derivation.value, Entry::integer(-360));
//! ```

use crate::analysis::{AnalysisOptions, Derivation, DeterminantMethod};
use crate::matrix::{Entry, Matrix};

// =================================================================================================
// LU Method
// =================================================================================================

/// Determinant via LU decomposition with partial pivoting
///
/// # Algorithm
///
/// For each pivot column i:
///
/// 1. Select the row r ≥ i with the largest |M\[r\]\[i\]|; swap it into
///    place and count the swap
/// 2. If the pivot is (near-)zero, return the domain's exact zero:
///    the matrix is singular
/// 3. Otherwise eliminate below the pivot with
///    `factor = M[k][i] / M[i][i]`
///
/// The determinant is the diagonal product, negated when the swap
/// count is odd.
///
/// When step recording is requested, each swap and each nonzero
/// elimination factor produces one ordered human-readable line, e.g.
/// `R3 = R3 - 1/2 x R1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuMethod;

impl LuMethod {
    /// Create a new LU determinant method
    ///
    /// # Example
    ///
    /// ```rust
    /// use det_rs::analysis::{DeterminantMethod, LuMethod};
    ///
    /// let method = LuMethod::new();
    /// assert_eq!(method.name(), "LU Decomposition");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl DeterminantMethod for LuMethod {
    fn determinant(
        &self,
        matrix: &Matrix,
        options: &AnalysisOptions,
    ) -> Result<Derivation, String> {
        // ====== Step 1: Validation ======

        options.validate()?;

        let n = matrix.size();
        let domain = matrix.domain();

        // ====== Step 2: Setup ======

        // Private working copy; the caller's matrix stays untouched.
        let mut m = matrix.working_copy();
        let mut steps: Vec<String> = Vec::new();
        let mut swaps: usize = 0;

        if options.record_steps {
            steps.push("Starting LU decomposition...".to_string());
            steps.push(format!("Initial matrix ({}x{})", n, n));
        }

        // ====== Step 3: Elimination ======

        for i in 0..n {
            // Partial pivoting: largest |candidate| in column i, rows i..n
            let mut max_row = i;
            for k in (i + 1)..n {
                if m[k * n + i].magnitude() > m[max_row * n + i].magnitude() {
                    max_row = k;
                }
            }

            if max_row != i {
                for j in 0..n {
                    m.swap(i * n + j, max_row * n + j);
                }
                swaps += 1;
                if options.record_steps {
                    steps.push(format!("Swapped rows {} <-> {}", i + 1, max_row + 1));
                }
            }

            // Singularity short-circuit: a near-zero pivot (exact zero
            // in the rational domain) ends the computation with the
            // domain's exact zero.
            if m[i * n + i].is_near_zero(options.tolerance) {
                if options.record_steps {
                    steps.push("Zero pivot found - matrix is singular".to_string());
                }

                let mut derivation = Derivation::new(Entry::zero(domain));
                derivation.steps = steps;
                derivation.add_metadata("method", self.name());
                derivation.add_metadata("singular", "true");
                derivation.add_metadata("swaps", &swaps.to_string());
                return Ok(derivation);
            }

            // Eliminate column i below the pivot
            for k in (i + 1)..n {
                let factor = m[k * n + i].clone() / m[i * n + i].clone();

                for j in i..n {
                    let delta = factor.clone() * m[i * n + j].clone();
                    m[k * n + j] = m[k * n + j].clone() - delta;
                }

                if options.record_steps && !factor.is_zero() {
                    steps.push(format!("R{} = R{} - {} x R{}", k + 1, k + 1, factor, i + 1));
                }
            }
        }

        // ====== Step 4: Diagonal Product ======

        let mut det = m[0].clone();
        for i in 1..n {
            det = det * m[i * n + i].clone();
        }

        // Each row swap flips the determinant's sign
        if swaps % 2 == 1 {
            det = -det;
        }

        if options.record_steps {
            steps.push("Elimination complete".to_string());
            steps.push(format!("Product of diagonal: {}", det));
            if swaps % 2 == 1 {
                steps.push(format!("Applied sign change for {} row swaps", swaps));
            }
        }

        // ====== Step 5: Build Result ======

        let mut derivation = Derivation::new(det);
        derivation.steps = steps;
        derivation.add_metadata("method", self.name());
        derivation.add_metadata("swaps", &swaps.to_string());

        Ok(derivation)
    }

    fn name(&self) -> &'static str {
        "LU Decomposition"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Domain;

    fn det_of(matrix: &Matrix) -> Entry {
        LuMethod::new()
            .determinant(matrix, &AnalysisOptions::new())
            .unwrap()
            .value
    }

    // ====== Base Sizes ======

    #[test]
    fn test_lu_1x1() {
        let m = Matrix::from_integers(&[vec![7]]).unwrap();
        assert_eq!(det_of(&m), Entry::integer(7));
    }

    #[test]
    fn test_lu_2x2() {
        // det [[2,1],[1,4]] = 7
        let m = Matrix::from_floats(&[vec![2.0, 1.0], vec![1.0, 4.0]]).unwrap();
        assert!(det_of(&m).near_equal(&Entry::float(7.0), 1e-10));
    }

    #[test]
    fn test_lu_3x3() {
        // >>> np.linalg.det([[6,1,1],[4,-2,5],[2,8,7]])
        // -306.0
        let m = Matrix::from_floats(&[
            vec![6.0, 1.0, 1.0],
            vec![4.0, -2.0, 5.0],
            vec![2.0, 8.0, 7.0],
        ])
        .unwrap();
        assert!(det_of(&m).near_equal(&Entry::float(-306.0), 1e-9));
    }

    #[test]
    fn test_lu_4x4() {
        // >>> np.linalg.det([[1,2,3,4],[5,6,7,8],[2,6,4,8],[3,1,1,2]])
        // 72.0
        let m = Matrix::from_integers(&[
            vec![1, 2, 3, 4],
            vec![5, 6, 7, 8],
            vec![2, 6, 4, 8],
            vec![3, 1, 1, 2],
        ])
        .unwrap();
        assert_eq!(det_of(&m), Entry::integer(72));
    }

    // ====== Domain Preservation ======

    #[test]
    fn test_lu_exact_hilbert() {
        // Hilbert 3x3: determinant is exactly 1/2160, not a float
        let half = Entry::rational(1, 2).unwrap();
        let third = Entry::rational(1, 3).unwrap();
        let quarter = Entry::rational(1, 4).unwrap();
        let fifth = Entry::rational(1, 5).unwrap();

        let hilbert = Matrix::from_rows(vec![
            vec![Entry::integer(1), half.clone(), third.clone()],
            vec![half.clone(), third.clone(), quarter.clone()],
            vec![third, quarter, fifth],
        ])
        .unwrap();

        let det = det_of(&hilbert);
        assert_eq!(det, Entry::rational(1, 2160).unwrap());
        assert_eq!(det.domain(), Domain::Rational);
    }

    #[test]
    fn test_lu_complex() {
        // det [[i, 0], [0, i]] = i*i = -1
        let m = Matrix::from_rows(vec![
            vec![Entry::complex(0.0, 1.0), Entry::complex(0.0, 0.0)],
            vec![Entry::complex(0.0, 0.0), Entry::complex(0.0, 1.0)],
        ])
        .unwrap();
        assert!(det_of(&m).near_equal(&Entry::complex(-1.0, 0.0), 1e-12));
    }

    // ====== Singularity ======

    #[test]
    fn test_lu_singular_returns_domain_zero() {
        // Linearly dependent rows: determinant is zero, not an error
        let m = Matrix::from_integers(&[vec![1, 2, 3], vec![2, 4, 6], vec![7, 8, 9]]).unwrap();
        let derivation = LuMethod::new()
            .determinant(&m, &AnalysisOptions::new())
            .unwrap();

        assert_eq!(derivation.value, Entry::integer(0));
        assert_eq!(derivation.value.domain(), Domain::Rational);
        assert_eq!(derivation.metadata.get("singular"), Some(&"true".to_string()));
    }

    #[test]
    fn test_lu_zero_row() {
        let m = Matrix::from_floats(&[
            vec![1.0, 2.0, 3.0],
            vec![0.0, 0.0, 0.0],
            vec![4.0, 5.0, 6.0],
        ])
        .unwrap();
        assert_eq!(det_of(&m), Entry::float(0.0));
    }

    // ====== Swap Parity ======

    #[test]
    fn test_lu_swap_negates() {
        let m = Matrix::from_integers(&[
            vec![1, 2, 3, 4],
            vec![5, 6, 7, 8],
            vec![2, 6, 4, 8],
            vec![3, 1, 1, 2],
        ])
        .unwrap();
        let swapped = m.with_swapped_rows(0, 2);

        assert_eq!(det_of(&m), Entry::integer(72));
        assert_eq!(det_of(&swapped), Entry::integer(-72));
    }

    #[test]
    fn test_lu_identity_needs_no_swaps() {
        let eye = Matrix::identity(5, Domain::Float);
        let derivation = LuMethod::new()
            .determinant(&eye, &AnalysisOptions::new())
            .unwrap();

        assert_eq!(derivation.value, Entry::float(1.0));
        assert_eq!(derivation.metadata.get("swaps"), Some(&"0".to_string()));
    }

    // ====== Step Log ======

    #[test]
    fn test_lu_steps_empty_by_default() {
        let m = Matrix::from_integers(&[vec![1, 2], vec![3, 4]]).unwrap();
        let derivation = LuMethod::new()
            .determinant(&m, &AnalysisOptions::new())
            .unwrap();
        assert!(derivation.steps.is_empty());
    }

    #[test]
    fn test_lu_steps_record_swap_and_elimination() {
        // Column pivot forces a swap (3 > 1), then elimination
        let m = Matrix::from_integers(&[vec![1, 2], vec![3, 4]]).unwrap();
        let derivation = LuMethod::new()
            .determinant(&m, &AnalysisOptions::with_steps())
            .unwrap();

        let joined = derivation.steps.join("\n");
        assert!(joined.contains("Swapped rows 1 <-> 2"));
        assert!(joined.contains("R2 = R2 - 1/3 x R1"));
        assert!(joined.contains("sign change"));
        assert_eq!(derivation.value, Entry::integer(-2));
    }

    #[test]
    fn test_lu_steps_note_singularity() {
        let m = Matrix::from_integers(&[vec![0, 0], vec![0, 0]]).unwrap();
        let derivation = LuMethod::new()
            .determinant(&m, &AnalysisOptions::with_steps())
            .unwrap();
        assert!(derivation
            .steps
            .iter()
            .any(|s| s.contains("singular")));
    }

    // ====== Options ======

    #[test]
    fn test_lu_rejects_invalid_tolerance() {
        let m = Matrix::from_integers(&[vec![1]]).unwrap();
        let bad = AnalysisOptions::new().tolerance(-1.0);
        assert!(LuMethod::new().determinant(&m, &bad).is_err());
    }

    #[test]
    fn test_lu_tolerance_decides_float_singularity() {
        // A pivot of 1e-10 is singular at tolerance 1e-9 but regular at 1e-12
        let m = Matrix::from_floats(&[vec![1e-10, 0.0], vec![0.0, 1.0]]).unwrap();

        let strict = LuMethod::new()
            .determinant(&m, &AnalysisOptions::new().tolerance(1e-9))
            .unwrap();
        assert_eq!(strict.value, Entry::float(0.0));

        let loose = LuMethod::new()
            .determinant(&m, &AnalysisOptions::new().tolerance(1e-12))
            .unwrap();
        assert!(loose.value.near_equal(&Entry::float(1e-10), 1e-20));
    }
}
