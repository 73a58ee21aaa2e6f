//! Matrix input sources
//!
//! Ways to obtain a [`Matrix`](crate::matrix::Matrix) besides building
//! it in code:
//!
//! - [`load_matrix_csv`]: plain CSV files, exact or float parsing
//! - [`random_matrix`] / [`random_matrix_with`]: uniform random fill
//!
//! The command-line tool adds an interactive row editor on top of
//! these; it lives in the binary, not here.

pub mod csv;
pub mod random;

pub use csv::load_matrix_csv;
pub use random::{random_matrix, random_matrix_with};
