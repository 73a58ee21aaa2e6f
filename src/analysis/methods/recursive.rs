//! Recursive cofactor-expansion determinant method
//!
//! # Mathematical Background
//!
//! Laplace expansion along the first row:
//!
//! ```text
//! det(A) = Σ_j (−1)^j · A[0][j] · det(minor(A, 0, j))
//! ```
//!
//! where `minor(A, 0, j)` deletes row 0 and column j.
//!
//! # Characteristics
//!
//! - **Cost**: O(n!); pedagogical, kept for cross-checking LU and for
//!   showing the expansion term by term
//! - **Exactness**: no pivoting and no tolerance; exact in every domain
//!   up to floating-point arithmetic itself
//!
//! Callers should cap the size (the CLI and benchmarks stop at
//! [`RECURSIVE_SIZE_LIMIT`](crate::analysis::RECURSIVE_SIZE_LIMIT)); the
//! method itself accepts any size and merely becomes slow.
//!
//! # Example
//!
//! ```rust
//! use det_rs::matrix::{Matrix, Entry};
//! use det_rs::analysis::{AnalysisOptions, DeterminantMethod, RecursiveMethod};
//!
//! let m = Matrix::from_integers(&[vec![1, 2], vec![3, 4]]).unwrap();
//! let derivation = RecursiveMethod::new()
//!     .determinant(&m, &AnalysisOptions::new())
//!     .unwrap();
//! assert_eq!(derivation.value, Entry::integer(-2));
//! ```

use crate::analysis::{AnalysisOptions, Derivation, DeterminantMethod};
use crate::matrix::{Entry, Matrix};

/// Observer for long-running expansions
///
/// Called with the fraction of top-level cofactor terms completed,
/// in `0.0..=1.0`. Replaces any notion of a background progress
/// thread: the caller decides what (if anything) to display.
pub type ProgressHook = Box<dyn Fn(f64) + Send + Sync>;

// =================================================================================================
// Recursive Method
// =================================================================================================

/// Determinant via recursive cofactor expansion along the first row
///
/// Base cases: a 1×1 matrix is its single entry; a 2×2 matrix is
/// `ad − bc`. Larger matrices expand into n minors of size n−1.
///
/// An optional [`ProgressHook`] fires after each top-level term, which
/// is where essentially all the work happens for this algorithm.
#[derive(Default)]
pub struct RecursiveMethod {
    progress: Option<ProgressHook>,
}

impl RecursiveMethod {
    /// Create a new recursive determinant method
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// Attach a progress observer (builder pattern)
    ///
    /// # Example
    ///
    /// ```rust
    /// use det_rs::analysis::RecursiveMethod;
    ///
    /// let method = RecursiveMethod::new().with_progress(Box::new(|fraction| {
    ///     let _ = fraction; // e.g. redraw a progress bar
    /// }));
    /// ```
    pub fn with_progress(mut self, hook: ProgressHook) -> Self {
        self.progress = Some(hook);
        self
    }

    /// Cofactor expansion on a flat row-major slice
    ///
    /// `n` is the side length of the submatrix held in `cells`.
    fn expand(cells: &[Entry], n: usize) -> Entry {
        // ====== Base Cases ======

        if n == 1 {
            return cells[0].clone();
        }
        if n == 2 {
            // ad - bc
            return cells[0].clone() * cells[3].clone() - cells[1].clone() * cells[2].clone();
        }

        // ====== Expansion Along Row 0 ======

        let domain = cells[0].domain();
        let mut det = Entry::zero(domain);

        for j in 0..n {
            let coefficient = &cells[j];
            if coefficient.is_zero() {
                // Zero coefficient contributes nothing; skip the minor
                continue;
            }

            // Minor: drop row 0 and column j
            let mut minor = Vec::with_capacity((n - 1) * (n - 1));
            for r in 1..n {
                for c in 0..n {
                    if c != j {
                        minor.push(cells[r * n + c].clone());
                    }
                }
            }

            let mut term = coefficient.clone() * Self::expand(&minor, n - 1);
            if j % 2 == 1 {
                term = -term;
            }
            det = det + term;
        }

        det
    }
}

impl DeterminantMethod for RecursiveMethod {
    fn determinant(
        &self,
        matrix: &Matrix,
        options: &AnalysisOptions,
    ) -> Result<Derivation, String> {
        // ====== Step 1: Validation ======

        options.validate()?;

        let n = matrix.size();
        let cells = matrix.working_copy();

        // ====== Step 2: Expansion ======

        let value = if n <= 2 {
            if let Some(hook) = &self.progress {
                hook(1.0);
            }
            Self::expand(&cells, n)
        } else {
            // Drive the top level here so the hook can observe each
            // cofactor term as it completes.
            let domain = matrix.domain();
            let mut det = Entry::zero(domain);
            let mut steps: Vec<String> = Vec::new();
            if options.record_steps {
                steps.push(format!("Expanding along row 1 ({} terms):", n));
            }

            for j in 0..n {
                let coefficient = matrix.at(0, j);
                if !coefficient.is_zero() {
                    let mut minor = Vec::with_capacity((n - 1) * (n - 1));
                    for r in 1..n {
                        for c in 0..n {
                            if c != j {
                                minor.push(matrix.at(r, c).clone());
                            }
                        }
                    }

                    let minor_det = Self::expand(&minor, n - 1);
                    let mut term = coefficient.clone() * minor_det.clone();
                    if j % 2 == 1 {
                        term = -term;
                    }

                    if options.record_steps {
                        let sign = if j % 2 == 0 { "+" } else { "-" };
                        steps.push(format!(
                            "{}({}) x det(minor[0][{}]) = {}({}) x {}",
                            sign, coefficient, j, sign, coefficient, minor_det
                        ));
                    }

                    det = det + term;
                }

                if let Some(hook) = &self.progress {
                    hook((j + 1) as f64 / n as f64);
                }
            }

            if options.record_steps {
                steps.push(format!("Sum of terms: {}", det));
            }

            let mut derivation = Derivation::new(det);
            derivation.steps = steps;
            derivation.add_metadata("method", self.name());
            return Ok(derivation);
        };

        // ====== Step 3: Build Result (small sizes) ======

        let mut derivation = Derivation::new(value);
        if options.record_steps {
            derivation.steps.push(match n {
                1 => "1x1 matrix: determinant is the single entry".to_string(),
                _ => "2x2 matrix: ad - bc".to_string(),
            });
        }
        derivation.add_metadata("method", self.name());
        Ok(derivation)
    }

    fn name(&self) -> &'static str {
        "Recursive Cofactor Expansion"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
