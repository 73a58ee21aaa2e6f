//! Matrix analysis layer
//!
//! Determinants, rank, and whole-matrix property summaries over the
//! domain-tagged [`Matrix`](crate::matrix::Matrix) type.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   analyze()                     │
//! │     determinant + trace + rank + flags          │
//! └────────┬──────────────────────┬─────────────────┘
//!          │                      │
//! ┌────────▼─────────┐   ┌────────▼─────────┐
//! │ DeterminantMethod │   │  estimate_rank   │
//! │  (trait seam)     │   │ (pivot counting) │
//! └────────┬─────────┘   └──────────────────┘
//!          │
//!    ┌─────┴──────┐
//!    │            │
//! LuMethod   RecursiveMethod
//! (O(n³))       (O(n!))
//! ```
//!
//! # Determinant contracts
//!
//! - **Domain preservation**: rational in, rational out, exactly.
//!   Computing a determinant never coerces to floating point.
//! - **Singularity is a value**: a singular matrix yields the zero of
//!   its domain, never an error.
//! - **Step logs are opt-in**: [`AnalysisOptions::with_steps`] turns on
//!   the ordered human-readable derivation lines.
//!
//! # Example
//!
//! ```rust
//! use det_rs::matrix::Matrix;
//! use det_rs::analysis::{analyze, AnalysisOptions, DeterminantMethod, LuMethod};
//!
//! let m = Matrix::from_integers(&[vec![1, 1, 1], vec![1, 2, 4], vec![1, 3, 9]]).unwrap();
//!
//! let derivation = LuMethod::new()
//!     .determinant(&m, &AnalysisOptions::with_steps())
//!     .unwrap();
//! println!("det = {}", derivation.value);
//! for line in &derivation.steps {
//!     println!("  {}", line);
//! }
//!
//! let report = analyze(&m).unwrap();
//! assert_eq!(report.rank, 3);
//! ```

// ===== Module declarations =====

pub mod methods;
pub mod properties;
pub mod rank;
pub mod traits;

// ===== Re-exports =====

pub use methods::{LuMethod, ProgressHook, RecursiveMethod};
pub use properties::{analyze, analyze_with, MatrixAnalysis};
pub use rank::estimate_rank;
pub use traits::{AnalysisOptions, Derivation, DeterminantMethod};

// ===== Constants =====

/// Default near-zero threshold for float and complex comparisons
///
/// Used for pivot tests, rank estimation, and singularity
/// classification unless an [`AnalysisOptions`] overrides it. Exact
/// rational comparisons ignore it entirely.
pub const DEFAULT_NEAR_ZERO_TOLERANCE: f64 = 1e-12;

/// Largest size at which recursive cofactor expansion is offered by
/// the command-line tool and the benchmarks
///
/// O(n!) growth makes 7×7 and beyond impractical; the library method
/// itself accepts any size.
pub const RECURSIVE_SIZE_LIMIT: usize = 6;

// =================================================================================================
// Tests
// =================================================================================================
