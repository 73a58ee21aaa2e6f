//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    assert_entries_close,
    hilbert_3,
    nalgebra_determinant,
    seeded_matrix,
};
