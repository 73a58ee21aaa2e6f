//! Numeric cell types
//!
//! This module provides the tagged numeric value stored in every matrix
//! cell. A computation must stay in the numeric domain of its input:
//! exact rationals never silently become floats (exact mode exists
//! precisely to avoid floating-point error on ill-conditioned matrices
//! such as the Hilbert family).
//!
//! # Domains
//!
//! - **Rational**: arbitrary-precision exact fraction (`BigRational`)
//! - **Float**: `f64`
//! - **Complex**: `f64` real/imaginary pair
//!
//! Integers are represented as rationals with denominator 1, so integer
//! matrices get exact determinants for free.

use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;

// =================================================================================================
// Numeric Domain (Type-safe Identifier)
// =================================================================================================

/// Numeric domain of a matrix
///
/// Every matrix is validated to hold cells of a single domain, so the
/// algorithms never have to decide a promotion rule mid-elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Exact rational arithmetic (arbitrary precision)
    Rational,

    /// Floating-point arithmetic (f64)
    Float,

    /// Complex arithmetic (f64 real and imaginary parts)
    Complex,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Rational => write!(f, "rational"),
            Domain::Float => write!(f, "float"),
            Domain::Complex => write!(f, "complex"),
        }
    }
}

// =================================================================================================
// Entry (Tagged Numeric Cell)
// =================================================================================================

/// A single matrix cell
///
/// # Storage Types
///
/// - **Rational**: exact fraction, never rounds
/// - **Float**: ordinary `f64`
/// - **Complex**: `f64` pair, magnitude used wherever an absolute value
///   is needed (pivot selection, singularity tests)
///
/// # Arithmetic
///
/// All four basic operations and negation are dispatched per variant.
/// Same-domain operands stay in their domain. Mixed-domain operands are
/// promoted (rational → float → complex); matrices are domain-consistent
/// by construction, so promotion is only reachable through direct
/// `Entry` arithmetic, never through a `Matrix` computation.
///
/// # Example
///
/// ```rust
/// use det_rs::matrix::Entry;
///
/// let half = Entry::rational(1, 2).unwrap();
/// let third = Entry::rational(1, 3).unwrap();
/// assert_eq!(half * third, Entry::rational(1, 6).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Exact rational value
    Rational(BigRational),

    /// Floating-point value
    Float(f64),

    /// Complex value
    Complex(Complex64),
}

impl Entry {
    // ======================================= constructors =======================================

    /// Create an exact integer (denominator 1)
    pub fn integer(value: i64) -> Self {
        Self::Rational(BigRational::from_integer(BigInt::from(value)))
    }

    /// Create an exact rational from numerator and denominator
    ///
    /// Fails when the denominator is zero.
    pub fn rational(numerator: i64, denominator: i64) -> Result<Self, String> {
        if denominator == 0 {
            return Err(format!(
                "Invalid rational {}/0: denominator must be nonzero",
                numerator
            ));
        }
        Ok(Self::Rational(BigRational::new(
            BigInt::from(numerator),
            BigInt::from(denominator),
        )))
    }

    /// Create a floating-point cell
    pub fn float(value: f64) -> Self {
        Self::Float(value)
    }

    /// Create a complex cell from real and imaginary parts
    pub fn complex(re: f64, im: f64) -> Self {
        Self::Complex(Complex64::new(re, im))
    }

    /// The exact zero of a given domain
    pub fn zero(domain: Domain) -> Self {
        match domain {
            Domain::Rational => Self::Rational(BigRational::zero()),
            Domain::Float => Self::Float(0.0),
            Domain::Complex => Self::Complex(Complex64::new(0.0, 0.0)),
        }
    }

    /// The multiplicative identity of a given domain
    pub fn one(domain: Domain) -> Self {
        match domain {
            Domain::Rational => Self::Rational(BigRational::from_integer(BigInt::from(1))),
            Domain::Float => Self::Float(1.0),
            Domain::Complex => Self::Complex(Complex64::new(1.0, 0.0)),
        }
    }

    // ========================================== Queries ==========================================

    /// Numeric domain of this cell
    pub fn domain(&self) -> Domain {
        match self {
            Entry::Rational(_) => Domain::Rational,
            Entry::Float(_) => Domain::Float,
            Entry::Complex(_) => Domain::Complex,
        }
    }

    /// Exact zero test (no tolerance)
    pub fn is_zero(&self) -> bool {
        match self {
            Entry::Rational(r) => r.is_zero(),
            Entry::Float(x) => *x == 0.0,
            Entry::Complex(z) => z.re == 0.0 && z.im == 0.0,
        }
    }

    /// Near-zero test at a given tolerance
    ///
    /// Rationals compare to exactly zero (the tolerance is ignored, per
    /// the exact-arithmetic contract). Floats compare `|x| < tolerance`,
    /// complex values compare their magnitude.
    pub fn is_near_zero(&self, tolerance: f64) -> bool {
        match self {
            Entry::Rational(r) => r.is_zero(),
            Entry::Float(x) => x.abs() < tolerance,
            Entry::Complex(z) => z.norm() < tolerance,
        }
    }

    /// Absolute magnitude as an `f64`, used for pivot selection
    ///
    /// A rational too large for `f64` maps to infinity, which simply
    /// makes it win the pivot comparison; the exact value is never
    /// touched by this approximation.
    pub fn magnitude(&self) -> f64 {
        match self {
            Entry::Rational(r) => r.abs().to_f64().unwrap_or(f64::INFINITY),
            Entry::Float(x) => x.abs(),
            Entry::Complex(z) => z.norm(),
        }
    }

    /// Approximate equality at a tolerance (exact in the rational domain)
    pub fn near_equal(&self, other: &Entry, tolerance: f64) -> bool {
        match (self, other) {
            (Entry::Rational(a), Entry::Rational(b)) => a == b,
            _ => (self.clone() - other.clone()).is_near_zero(tolerance),
        }
    }

    // ======================================== Extractions ========================================

    /// Approximate `f64` value (real part for complex)
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Entry::Rational(r) => r.to_f64(),
            Entry::Float(x) => Some(*x),
            Entry::Complex(z) if z.im == 0.0 => Some(z.re),
            Entry::Complex(_) => None,
        }
    }

    /// Extract the exact rational, if this is one
    pub fn try_as_rational(&self) -> Option<&BigRational> {
        match self {
            Entry::Rational(r) => Some(r),
            _ => None,
        }
    }

    // ===================================== Domain promotion =====================================

    /// Lift a mixed-domain pair to a common domain
    ///
    /// Rational and float meet at float; anything mixed with complex
    /// meets at complex. Only called on mixed pairs; same-domain
    /// arithmetic never goes through here.
    fn promote(a: Entry, b: Entry) -> (Entry, Entry) {
        let complex = matches!(a, Entry::Complex(_)) || matches!(b, Entry::Complex(_));
        if complex {
            (a.into_complex(), b.into_complex())
        } else {
            (a.into_float(), b.into_float())
        }
    }

    fn into_float(self) -> Entry {
        match self {
            Entry::Rational(r) => Entry::Float(r.to_f64().unwrap_or(f64::NAN)),
            other => other,
        }
    }

    fn into_complex(self) -> Entry {
        match self {
            Entry::Rational(r) => Entry::Complex(Complex64::new(r.to_f64().unwrap_or(f64::NAN), 0.0)),
            Entry::Float(x) => Entry::Complex(Complex64::new(x, 0.0)),
            complex => complex,
        }
    }
}

// ================================== Simple arithmetic functions ==================================

impl std::ops::Add for Entry {
    type Output = Entry;
    fn add(self, rhs: Self) -> Self::Output {
        use Entry::*;
        match (self, rhs) {
            (Rational(a), Rational(b)) => Rational(a + b),
            (Float(a), Float(b)) => Float(a + b),
            (Complex(a), Complex(b)) => Complex(a + b),
            (a, b) => {
                let (a, b) = Entry::promote(a, b);
                a + b
            }
        }
    }
}

impl std::ops::Sub for Entry {
    type Output = Entry;
    fn sub(self, rhs: Self) -> Self::Output {
        use Entry::*;
        match (self, rhs) {
            (Rational(a), Rational(b)) => Rational(a - b),
            (Float(a), Float(b)) => Float(a - b),
            (Complex(a), Complex(b)) => Complex(a - b),
            (a, b) => {
                let (a, b) = Entry::promote(a, b);
                a - b
            }
        }
    }
}

impl std::ops::Mul for Entry {
    type Output = Entry;
    fn mul(self, rhs: Self) -> Self::Output {
        use Entry::*;
        match (self, rhs) {
            (Rational(a), Rational(b)) => Rational(a * b),
            (Float(a), Float(b)) => Float(a * b),
            (Complex(a), Complex(b)) => Complex(a * b),
            (a, b) => {
                let (a, b) = Entry::promote(a, b);
                a * b
            }
        }
    }
}

impl std::ops::Div for Entry {
    type Output = Entry;

    /// Division; callers guard against zero divisors (the elimination
    /// algorithms test the pivot before dividing by it).
    fn div(self, rhs: Self) -> Self::Output {
        use Entry::*;
        match (self, rhs) {
            (Rational(a), Rational(b)) => Rational(a / b),
            (Float(a), Float(b)) => Float(a / b),
            (Complex(a), Complex(b)) => Complex(a / b),
            (a, b) => {
                let (a, b) = Entry::promote(a, b);
                a / b
            }
        }
    }
}

impl std::ops::Neg for Entry {
    type Output = Entry;
    fn neg(self) -> Self::Output {
        match self {
            Entry::Rational(r) => Entry::Rational(-r),
            Entry::Float(x) => Entry::Float(-x),
            Entry::Complex(z) => Entry::Complex(-z),
        }
    }
}

// ========================================== Parsing ==========================================

impl Entry {
    /// Parse a cell from user text
    ///
    /// In exact mode, accepts `a/b` fractions and plain integers, and
    /// rejects decimals (a decimal literal would defeat the point of
    /// exact arithmetic). Otherwise parses any `f64` literal. Complex
    /// cells are constructed programmatically, not parsed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use det_rs::matrix::Entry;
    ///
    /// assert_eq!(Entry::parse("1/3", true).unwrap(), Entry::rational(1, 3).unwrap());
    /// assert_eq!(Entry::parse("2.5", false).unwrap(), Entry::float(2.5));
    /// assert!(Entry::parse("2.5", true).is_err());
    /// ```
    pub fn parse(text: &str, exact: bool) -> Result<Self, String> {
        let text = text.trim();
        if text.is_empty() {
            return Err("Empty cell value".to_string());
        }

        if exact {
            if let Some((num, den)) = text.split_once('/') {
                let numerator: i64 = num
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid numerator in '{}'", text))?;
                let denominator: i64 = den
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid denominator in '{}'", text))?;
                return Entry::rational(numerator, denominator);
            }
            let value: i64 = text.parse().map_err(|_| {
                format!(
                    "Invalid exact value '{}': expected an integer or a/b fraction",
                    text
                )
            })?;
            Ok(Entry::integer(value))
        } else {
            let value: f64 = text
                .parse()
                .map_err(|_| format!("Invalid numeric value '{}'", text))?;
            Ok(Entry::float(value))
        }
    }
}

// ======================== Display ============================

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Rational(r) => {
                if r.is_integer() {
                    write!(f, "{}", r.numer())
                } else {
                    write!(f, "{}/{}", r.numer(), r.denom())
                }
            }
            Entry::Float(x) => write!(f, "{}", format_float(*x, 6)),
            Entry::Complex(z) => {
                if z.im == 0.0 {
                    write!(f, "{}", format_float(z.re, 6))
                } else if z.re == 0.0 {
                    write!(f, "{}i", format_float(z.im, 6))
                } else if z.im < 0.0 {
                    write!(f, "{}-{}i", format_float(z.re, 6), format_float(-z.im, 6))
                } else {
                    write!(f, "{}+{}i", format_float(z.re, 6), format_float(z.im, 6))
                }
            }
        }
    }
}

/// Format a float without trailing noise: integers print bare, other
/// values print with at most `precision` decimal places.
pub(crate) fn format_float(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let formatted = format!("{:.*}", precision, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

// ==================== Tests ====================
