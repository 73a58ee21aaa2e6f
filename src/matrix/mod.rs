//! Matrix data model
//!
//! This module provides the value types the numeric core operates on:
//!
//! - **[`Entry`]**: tagged numeric cell (exact rational, float, complex)
//! - **[`Domain`]**: type-safe identifier for the three numeric domains
//! - **[`Matrix`]**: immutable, validated n×n grid of domain-consistent cells
//!
//! # Architecture
//!
//! The data model is **separate from the analysis algorithms**:
//! - This module defines what a matrix *is* (values, validation, basic
//!   per-matrix queries such as trace and symmetry)
//! - The [`analysis`](crate::analysis) module defines what is *computed*
//!   from it (determinants, rank, the full property snapshot)
//!
//! This separation allows the same matrix to flow through different
//! determinant methods, renderers, and exporters without conversion.
//!
//! # Numeric-domain invariant
//!
//! Every computation preserves the numeric domain of its input. A
//! rational matrix yields a rational determinant and trace, never a
//! silent float approximation. This is the whole point of exact mode:
//! the Hilbert 3×3 matrix has determinant exactly 1/2160, a value a
//! float pipeline can only approach.

// module declaration
pub mod entry;
#[allow(clippy::module_inception)]
pub mod matrix;

// re-export commonly used types for convenience
pub use entry::{Domain, Entry};
pub use matrix::Matrix;
