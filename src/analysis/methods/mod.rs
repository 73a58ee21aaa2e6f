//! Determinant methods
//!
//! Two interchangeable implementations of
//! [`DeterminantMethod`](crate::analysis::DeterminantMethod):
//!
//! | Method | Cost | Role |
//! |--------|------|------|
//! | [`LuMethod`] | O(n³) | Default; pivoted, tolerance-aware |
//! | [`RecursiveMethod`] | O(n!) | Pedagogical; cross-check, term-by-term steps |
//!
//! Both preserve the numeric domain of the input: a rational matrix
//! yields a rational determinant, exactly.

pub mod lu;
pub mod recursive;

pub use lu::LuMethod;
pub use recursive::{ProgressHook, RecursiveMethod};
