//! Gallery of reference matrices
//!
//! A small catalog of classic matrices with known determinants, used
//! by the command-line tool as ready-made inputs and by the test suite
//! as ground truth. Each entry carries its expected determinant in the
//! matrix's own numeric domain, so the exact ones stay exact
//! (Hilbert's 1/2160 is a rational, not 0.000463).

use crate::matrix::{Entry, Matrix};

// =================================================================================================
// Gallery Entry
// =================================================================================================

/// A named reference matrix with its known determinant
#[derive(Debug, Clone)]
pub struct GalleryMatrix {
    /// Stable lookup key, e.g. `"hilbert_3"`
    pub key: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// One-line description shown by the catalog listing
    pub description: &'static str,
    /// The matrix itself
    pub matrix: Matrix,
    /// Ground-truth determinant, in the matrix's domain
    pub expected_determinant: Entry,
}

// =================================================================================================
// Constructors
// =================================================================================================

/// 3×3 identity matrix (det = 1)
pub fn identity_3() -> GalleryMatrix {
    GalleryMatrix {
        key: "identity_3",
        name: "Identity 3x3",
        description: "The multiplicative identity; determinant 1",
        matrix: Matrix::from_integers(&[vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]])
            .unwrap_or_else(|e| unreachable!("identity_3 construction: {}", e)),
        expected_determinant: Entry::integer(1),
    }
}

/// 3×3 Hilbert matrix, H[i][j] = 1/(i+j+1) (det = 1/2160 exactly)
pub fn hilbert_3() -> GalleryMatrix {
    let frac = |p, q| {
        Entry::rational(p, q).unwrap_or_else(|e| unreachable!("hilbert_3 construction: {}", e))
    };
    let matrix = Matrix::from_rows(vec![
        vec![frac(1, 1), frac(1, 2), frac(1, 3)],
        vec![frac(1, 2), frac(1, 3), frac(1, 4)],
        vec![frac(1, 3), frac(1, 4), frac(1, 5)],
    ])
    .unwrap_or_else(|e| unreachable!("hilbert_3 construction: {}", e));

    GalleryMatrix {
        key: "hilbert_3",
        name: "Hilbert 3x3",
        description: "Notoriously ill-conditioned; determinant exactly 1/2160",
        matrix,
        expected_determinant: frac(1, 2160),
    }
}

/// 4×4 symmetric Pascal matrix, binomial coefficients (det = 1)
pub fn pascal_4() -> GalleryMatrix {
    GalleryMatrix {
        key: "pascal_4",
        name: "Pascal 4x4",
        description: "Symmetric binomial-coefficient matrix; determinant 1",
        matrix: Matrix::from_integers(&[
            vec![1, 1, 1, 1],
            vec![1, 2, 3, 4],
            vec![1, 3, 6, 10],
            vec![1, 4, 10, 20],
        ])
        .unwrap_or_else(|e| unreachable!("pascal_4 construction: {}", e)),
        expected_determinant: Entry::integer(1),
    }
}

/// 3×3 Lo Shu magic square (det = -360, trace = 15)
pub fn magic_3() -> GalleryMatrix {
    GalleryMatrix {
        key: "magic_3",
        name: "Magic Square 3x3",
        description: "Rows, columns and diagonals sum to 15; determinant -360",
        matrix: Matrix::from_integers(&[vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]])
            .unwrap_or_else(|e| unreachable!("magic_3 construction: {}", e)),
        expected_determinant: Entry::integer(-360),
    }
}

/// 3×3 Vandermonde matrix on nodes 1, 2, 3 (det = 2)
pub fn vandermonde_3() -> GalleryMatrix {
    GalleryMatrix {
        key: "vandermonde_3",
        name: "Vandermonde 3x3",
        description: "Powers of the nodes 1, 2, 3; determinant (2-1)(3-1)(3-2) = 2",
        matrix: Matrix::from_integers(&[vec![1, 1, 1], vec![1, 2, 4], vec![1, 3, 9]])
            .unwrap_or_else(|e| unreachable!("vandermonde_3 construction: {}", e)),
        expected_determinant: Entry::integer(2),
    }
}

/// 2×2 rotation by 45 degrees (det = 1.0)
pub fn rotation_2d() -> GalleryMatrix {
    let (sin, cos) = std::f64::consts::FRAC_PI_4.sin_cos();
    GalleryMatrix {
        key: "rotation_2d",
        name: "Rotation 2x2 (45 deg)",
        description: "Orthogonal rotation; determinant 1",
        matrix: Matrix::from_floats(&[vec![cos, -sin], vec![sin, cos]])
            .unwrap_or_else(|e| unreachable!("rotation_2d construction: {}", e)),
        expected_determinant: Entry::float(1.0),
    }
}

// =================================================================================================
// Catalog
// =================================================================================================

/// All gallery matrices, in display order
pub fn all() -> Vec<GalleryMatrix> {
    vec![
        identity_3(),
        hilbert_3(),
        pascal_4(),
        magic_3(),
        vandermonde_3(),
        rotation_2d(),
    ]
}

/// Look a gallery matrix up by key
///
/// # Example
///
/// ```rust
/// use det_rs::gallery;
///
/// let magic = gallery::get("magic_3").unwrap();
/// assert_eq!(magic.matrix.size(), 3);
/// assert!(gallery::get("no_such_matrix").is_none());
/// ```
pub fn get(key: &str) -> Option<GalleryMatrix> {
    all().into_iter().find(|entry| entry.key == key)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisOptions, DeterminantMethod, LuMethod, RecursiveMethod};
    use crate::matrix::Domain;

    #[test]
    fn test_catalog_keys_are_unique() {
        let entries = all();
        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 1) {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_get_by_key() {
        assert!(get("hilbert_3").is_some());
        assert!(get("pascal_4").is_some());
        assert!(get("").is_none());
        assert!(get("HILBERT_3").is_none());
    }

    // ====== Ground Truth ======

    #[test]
    fn test_every_entry_matches_its_expected_determinant() {
        let options = AnalysisOptions::new();
        for entry in all() {
            let computed = LuMethod::new()
                .determinant(&entry.matrix, &options)
                .unwrap()
                .value;
            assert!(
                computed.near_equal(&entry.expected_determinant, 1e-10),
                "{}: expected {}, got {}",
                entry.key,
                entry.expected_determinant,
                computed
            );
        }
    }

    #[test]
    fn test_recursive_agrees_on_the_whole_gallery() {
        let options = AnalysisOptions::new();
        for entry in all() {
            let lu = LuMethod::new()
                .determinant(&entry.matrix, &options)
                .unwrap()
                .value;
            let recursive = RecursiveMethod::new()
                .determinant(&entry.matrix, &options)
                .unwrap()
                .value;
            assert!(lu.near_equal(&recursive, 1e-10), "{}", entry.key);
        }
    }

    #[test]
    fn test_exact_entries_use_the_rational_domain() {
        assert_eq!(hilbert_3().matrix.domain(), Domain::Rational);
        assert_eq!(pascal_4().matrix.domain(), Domain::Rational);
        assert_eq!(rotation_2d().matrix.domain(), Domain::Float);
    }

    #[test]
    fn test_hilbert_det_is_exact() {
        assert_eq!(
            hilbert_3().expected_determinant,
            Entry::rational(1, 2160).unwrap()
        );
    }
}
