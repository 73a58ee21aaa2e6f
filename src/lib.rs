//! det-rs: Matrix Determinant Analysis Framework
//!
//! A small framework for computing determinants and basic matrix
//! properties over exact rational, floating-point, and complex
//! entries. Built with Rust for exactness and safety.
//!
//! # Architecture
//!
//! det-rs is built on two core principles:
//!
//! 1. **Separation of Values and Methods**
//!    - The matrix layer defines domain-tagged numeric values
//!      (what to compute on)
//!    - The analysis layer provides interchangeable determinant
//!      methods (how to compute)
//!
//! 2. **Exactness by Construction**
//!    - A rational matrix yields rational results, always; nothing in
//!      the pipeline silently coerces to floating point
//!    - Singular matrices yield a zero determinant, never an error
//!
//! # Quick Start
//!
//! ```rust
//! use det_rs::matrix::{Matrix, Entry};
//! use det_rs::analysis::{analyze, AnalysisOptions, DeterminantMethod, LuMethod};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Build a matrix (rational domain: exact arithmetic)
//! let magic = Matrix::from_integers(&[
//!     vec![2, 7, 6],
//!     vec![9, 5, 1],
//!     vec![4, 3, 8],
//! ])?;
//!
//! // 2. Compute the determinant with a recorded derivation
//! let derivation = LuMethod::new().determinant(&magic, &AnalysisOptions::with_steps())?;
//! assert_eq!(derivation.value, Entry::integer(-360));
//!
//! // 3. Or get the whole property summary at once
//! let report = analyze(&magic)?;
//! assert_eq!(report.trace, Entry::integer(15));
//! assert_eq!(report.rank, 3);
//! assert!(!report.is_singular);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`matrix`]: Domain-tagged entries and square matrices (values)
//! - [`analysis`]: Determinant methods, rank, property analysis
//! - [`gallery`]: Reference matrices with known determinants
//! - [`input`]: CSV loading and random generation
//! - [`output`]: Terminal rendering and CSV/JSON export

// Core modules
pub mod matrix;

pub mod analysis;
pub mod gallery;
pub mod input;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use det_rs::prelude::*;
    //! ```
    pub use crate::analysis::{analyze,
                              analyze_with,
                              estimate_rank,
                              AnalysisOptions,
                              Derivation,
                              DeterminantMethod,
                              LuMethod,
                              MatrixAnalysis,
                              RecursiveMethod};
    pub use crate::matrix::{Domain,
                            Entry,
                            Matrix};
}
