//! Random matrix generation
//!
//! Uniform entries over a caller-supplied integer range. Exact mode
//! produces rational (whole-number) cells so downstream arithmetic
//! stays exact; otherwise cells are uniform floats over the same
//! interval.

use crate::matrix::{Entry, Matrix};
use rand::Rng;

/// Generate a random n×n matrix with entries in `[min, max]`
///
/// Uses the thread-local RNG; see [`random_matrix_with`] for a
/// seedable variant.
pub fn random_matrix(n: usize, min: i64, max: i64, exact: bool) -> Result<Matrix, String> {
    random_matrix_with(&mut rand::thread_rng(), n, min, max, exact)
}

/// Generate a random n×n matrix from an explicit RNG
///
/// # Example
///
/// ```rust
/// use det_rs::input::random_matrix_with;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let m = random_matrix_with(&mut rng, 4, -10, 10, true).unwrap();
/// assert_eq!(m.size(), 4);
/// ```
pub fn random_matrix_with<R: Rng>(
    rng: &mut R,
    n: usize,
    min: i64,
    max: i64,
    exact: bool,
) -> Result<Matrix, String> {
    // ====== Step 1: Validation ======

    if n == 0 {
        return Err("Matrix size must be at least 1".to_string());
    }
    if min > max {
        return Err(format!(
            "Invalid entry range: min {} exceeds max {}",
            min, max
        ));
    }

    // ====== Step 2: Fill ======

    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let mut row = Vec::with_capacity(n);
        for _ in 0..n {
            let entry = if exact {
                Entry::integer(rng.gen_range(min..=max))
            } else {
                Entry::float(rng.gen_range(min as f64..=max as f64))
            };
            row.push(entry);
        }
        rows.push(row);
    }

    Matrix::from_rows(rows)
}

// =================================================================================================
// Tests
// =================================================================================================
