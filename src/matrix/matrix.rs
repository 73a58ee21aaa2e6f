//! Square matrix value object
//!
//! A [`Matrix`] is an n×n grid of [`Entry`] cells in a single numeric
//! domain. Matrices are immutable value objects: every analysis works
//! on a private copy of the cells, so a computation can never corrupt
//! the caller's matrix.
//!
//! # Validation
//!
//! Construction through [`Matrix::from_rows`] fails fast on malformed
//! input: empty, non-square, or domain-mixed grids are rejected with a
//! clear message. Downstream algorithms may therefore assume a valid
//! square matrix.

use crate::matrix::{Domain, Entry};
use std::fmt;

/// Square n×n matrix with domain-consistent cells
///
/// # Example
///
/// ```rust
/// use det_rs::matrix::{Matrix, Entry};
///
/// let m = Matrix::from_integers(&[vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]).unwrap();
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.trace(), Entry::integer(15));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Matrix dimension (n×n)
    n: usize,

    /// Row-major cells, length n²
    cells: Vec<Entry>,

    /// Common numeric domain of every cell
    domain: Domain,
}

impl Matrix {
    // ======================================= constructors =======================================

    /// Build a matrix from rows of cells
    ///
    /// # Errors
    ///
    /// - empty input or any empty row
    /// - non-square shape (every row must hold exactly n cells)
    /// - cells from more than one numeric domain
    pub fn from_rows(rows: Vec<Vec<Entry>>) -> Result<Self, String> {
        let n = rows.len();
        if n == 0 {
            return Err("Matrix must be square and non-empty".to_string());
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(format!(
                    "Matrix must be square and non-empty: row {} has {} cells, expected {}",
                    i + 1,
                    row.len(),
                    n
                ));
            }
        }

        let domain = rows[0][0].domain();
        for (i, row) in rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.domain() != domain {
                    return Err(format!(
                        "Inconsistent numeric domain at cell [{},{}]: expected {}, got {}",
                        i + 1,
                        j + 1,
                        domain,
                        cell.domain()
                    ));
                }
            }
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(Self { n, cells, domain })
    }

    /// Build an exact-integer matrix (rational domain)
    pub fn from_integers(rows: &[Vec<i64>]) -> Result<Self, String> {
        let entries = rows
            .iter()
            .map(|row| row.iter().map(|&v| Entry::integer(v)).collect())
            .collect();
        Self::from_rows(entries)
    }

    /// Build a floating-point matrix
    pub fn from_floats(rows: &[Vec<f64>]) -> Result<Self, String> {
        let entries = rows
            .iter()
            .map(|row| row.iter().map(|&v| Entry::float(v)).collect())
            .collect();
        Self::from_rows(entries)
    }

    /// The n×n identity matrix in a given domain
    ///
    /// # Panics
    ///
    /// Panics when `n == 0`; the identity of nothing is not a matrix.
    pub fn identity(n: usize, domain: Domain) -> Self {
        assert!(n >= 1, "Identity size must be at least 1, got {}", n);

        let mut cells = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cells.push(if i == j {
                    Entry::one(domain)
                } else {
                    Entry::zero(domain)
                });
            }
        }
        Self { n, cells, domain }
    }

    // ========================================== Queries ==========================================

    /// Matrix dimension n
    pub fn size(&self) -> usize {
        self.n
    }

    /// Numeric domain shared by all cells
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Cell at row `i`, column `j` (0-indexed)
    ///
    /// # Panics
    ///
    /// Panics on out-of-bounds indices.
    pub fn at(&self, i: usize, j: usize) -> &Entry {
        assert!(
            i < self.n && j < self.n,
            "Cell [{},{}] out of bounds for {}x{} matrix",
            i,
            j,
            self.n,
            self.n
        );
        &self.cells[i * self.n + j]
    }

    /// Iterate over the rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Entry]> {
        self.cells.chunks(self.n)
    }

    /// Flat row-major copy of the cells (the working buffer the
    /// elimination algorithms operate on)
    pub(crate) fn working_copy(&self) -> Vec<Entry> {
        self.cells.clone()
    }

    /// Sum of the diagonal cells, in the matrix's own domain
    pub fn trace(&self) -> Entry {
        let mut total = Entry::zero(self.domain);
        for i in 0..self.n {
            total = total + self.at(i, i).clone();
        }
        total
    }

    /// Exact symmetry test: `m[i][j] == m[j][i]` for all i, j
    ///
    /// Equality is exact on the native domain. There is no tolerance,
    /// so float matrices that are symmetric only up to rounding report
    /// `false`. Known precision caveat.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.at(i, j) != self.at(j, i) {
                    return false;
                }
            }
        }
        true
    }

    // ================================= Value-object derivations =================================

    /// A copy of this matrix with rows `i` and `j` exchanged
    pub fn with_swapped_rows(&self, i: usize, j: usize) -> Self {
        assert!(
            i < self.n && j < self.n,
            "Row swap [{},{}] out of bounds for {}x{} matrix",
            i,
            j,
            self.n,
            self.n
        );

        let mut cells = self.cells.clone();
        for col in 0..self.n {
            cells.swap(i * self.n + col, j * self.n + col);
        }
        Self {
            n: self.n,
            cells,
            domain: self.domain,
        }
    }

    /// A copy of this matrix with row `i` multiplied by `factor`
    pub fn with_scaled_row(&self, i: usize, factor: &Entry) -> Self {
        assert!(
            i < self.n,
            "Row {} out of bounds for {}x{} matrix",
            i,
            self.n,
            self.n
        );

        let mut cells = self.cells.clone();
        for col in 0..self.n {
            let idx = i * self.n + col;
            cells[idx] = cells[idx].clone() * factor.clone();
        }
        Self {
            n: self.n,
            cells,
            domain: self.domain,
        }
    }

    /// Approximate the cells as flat row-major `f64`s
    ///
    /// `None` when any cell has a nonzero imaginary part. Used by tests
    /// to cross-check against a reference float implementation.
    pub fn to_f64_flat(&self) -> Option<Vec<f64>> {
        self.cells.iter().map(|c| c.to_f64()).collect()
    }
}

// ======================== Display ============================

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix [{} x {}, {}]", self.n, self.n, self.domain)
    }
}

// ==================== Tests ====================
