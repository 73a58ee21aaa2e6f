//! Determinant method traits and types
//!
//! # Design Philosophy
//!
//! This module follows the same pattern throughout the analysis layer:
//! - `AnalysisOptions` defines HOW a computation runs (tolerance, step
//!   recording): explicit value, never a mutable global toggle
//! - `Derivation` is WHAT a determinant method returns (value, ordered
//!   step log, metadata)
//! - `DeterminantMethod` is the stable seam every algorithm implements,
//!   so callers can swap LU for cofactor expansion without code changes
//!
//! # Stability Guarantee
//!
//! - `DeterminantMethod` trait: STABLE since v0.1.0
//! - `AnalysisOptions`: EXTENSIBLE (fields may be added, never removed)

use crate::matrix::Entry;
use std::collections::HashMap;

// =================================================================================================
// Analysis Options
// =================================================================================================

/// Options for a determinant or rank computation
///
/// # Design
///
/// The near-zero tolerance decides the singular/non-singular boundary
/// for floating input, so it is an explicit named value here rather
/// than a literal buried in the elimination loop. Exact-rational input
/// ignores it (rationals compare to exactly zero).
///
/// # Examples
///
/// ```rust
/// use det_rs::analysis::AnalysisOptions;
///
/// // Defaults: no step log, 1e-12 tolerance
/// let options = AnalysisOptions::new();
///
/// // Step-by-step derivation with a looser tolerance
/// let verbose = AnalysisOptions::with_steps().tolerance(1e-9);
/// assert!(verbose.record_steps);
/// ```
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    /// Record a human-readable derivation step per elimination event
    pub record_steps: bool,

    /// Near-zero tolerance for pivot and singularity tests in the
    /// floating and complex domains
    pub tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            record_steps: false,
            tolerance: crate::analysis::DEFAULT_NEAR_ZERO_TOLERANCE,
        }
    }
}

impl AnalysisOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options with step recording enabled
    pub fn with_steps() -> Self {
        Self {
            record_steps: true,
            ..Self::default()
        }
    }

    /// Builder pattern: set the near-zero tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate that the options are numerically meaningful
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() {
            return Err("Tolerance must be finite".to_string());
        }
        if self.tolerance <= 0.0 {
            return Err("Tolerance must be positive".to_string());
        }
        Ok(())
    }
}

// =================================================================================================
// Derivation (Method Output)
// =================================================================================================

/// Result of one determinant computation
///
/// Carries the determinant value, the ordered derivation-step strings
/// (empty unless steps were requested; they are purely observational
/// and carry no state back into the computation), and free-form
/// metadata for diagnostics.
#[derive(Clone, Debug)]
pub struct Derivation {
    /// The determinant, in the input matrix's numeric domain
    pub value: Entry,

    /// Ordered human-readable elimination events
    pub steps: Vec<String>,

    /// Diagnostic metadata (method name, swap count, ...)
    pub metadata: HashMap<String, String>,
}

impl Derivation {
    /// Create a derivation holding just a value
    pub fn new(value: Entry) -> Self {
        Self {
            value,
            steps: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Add a diagnostic metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Determinant Method Trait
// =================================================================================================

/// Trait for determinant algorithms
///
/// # Responsibility
///
/// Computes the determinant of a validated square matrix. Does NOT
/// decide singularity of the overall analysis (that composition lives
/// in [`analyze`](crate::analysis::analyze)).
///
/// # Mandatory Point
///
/// Implementations must preserve the input's numeric domain and must
/// never mutate the caller's matrix: work on a private copy.
pub trait DeterminantMethod: Send + Sync {
    /// Compute the determinant of `matrix`
    ///
    /// # Errors
    ///
    /// Only invalid options fail; numeric singularity is data (a zero
    /// determinant), never an error.
    fn determinant(
        &self,
        matrix: &crate::matrix::Matrix,
        options: &AnalysisOptions,
    ) -> Result<Derivation, String>;

    /// Name of the method (used for display and metadata)
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Tests
// =================================================================================================
