//! Helper functions for integration tests

use det_rs::input::random_matrix_with;
use det_rs::matrix::{Entry, Matrix};
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Assert that two entries are close (within tolerance)
pub fn assert_entries_close(actual: &Entry, expected: &Entry, tolerance: f64, message: &str) {
    assert!(
        actual.near_equal(expected, tolerance),
        "{}: got {}, expected {} (tolerance {})",
        message,
        actual,
        expected,
        tolerance
    );
}

/// Deterministic random integer matrix for reproducible tests
pub fn seeded_matrix(seed: u64, n: usize) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    random_matrix_with(&mut rng, n, -10, 10, true).unwrap()
}

/// The exact 3x3 Hilbert matrix (determinant 1/2160)
pub fn hilbert_3() -> Matrix {
    let frac = |p, q| Entry::rational(p, q).unwrap();
    Matrix::from_rows(vec![
        vec![frac(1, 1), frac(1, 2), frac(1, 3)],
        vec![frac(1, 2), frac(1, 3), frac(1, 4)],
        vec![frac(1, 3), frac(1, 4), frac(1, 5)],
    ])
    .unwrap()
}

/// Independent determinant via nalgebra, for cross-checking
///
/// Returns `None` for complex matrices (no lossless f64 view).
pub fn nalgebra_determinant(matrix: &Matrix) -> Option<f64> {
    let flat = matrix.to_f64_flat()?;
    Some(DMatrix::from_row_slice(matrix.size(), matrix.size(), &flat).determinant())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_matrix_is_deterministic() {
        let a = seeded_matrix(5, 4);
        let b = seeded_matrix(5, 4);
        assert_eq!(a.at(3, 3), b.at(3, 3));
    }

    #[test]
    fn test_nalgebra_determinant_identity() {
        let eye = Matrix::identity(3, det_rs::matrix::Domain::Float);
        assert!((nalgebra_determinant(&eye).unwrap() - 1.0).abs() < 1e-12);
    }
}
