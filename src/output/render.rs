//! Terminal rendering of matrices
//!
//! Four display styles for square matrices, all column-aligned:
//!
//! ```text
//! box                 brackets            grid                  simple
//! ┌          ┐        [   2   7   6 ]     +----+----+----+      2 7 6
//! │  2  7  6 │        [   9   5   1 ]     |  2 |  7 |  6 |      9 5 1
//! │  9  5  1 │        [   4   3   8 ]     +----+----+----+      4 3 8
//! │  4  3  8 │                            |  9 |  5 |  1 |
//! └          ┘                            ...
//! ```
//!
//! Cells render through [`Entry`](crate::matrix::Entry)'s `Display`,
//! so rationals appear as `1/2`, not `0.5`.

use crate::matrix::Matrix;

// =============================================================================
// Styles
// =============================================================================

/// Matrix display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Unicode box-drawing frame
    #[default]
    Box,
    /// One bracketed line per row
    Brackets,
    /// ASCII grid with cell separators
    Grid,
    /// Bare space-separated values
    Simple,
}

impl RenderStyle {
    /// All styles, for listings and argument validation
    pub const ALL: [RenderStyle; 4] = [
        RenderStyle::Box,
        RenderStyle::Brackets,
        RenderStyle::Grid,
        RenderStyle::Simple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RenderStyle::Box => "box",
            RenderStyle::Brackets => "brackets",
            RenderStyle::Grid => "grid",
            RenderStyle::Simple => "simple",
        }
    }
}

impl std::str::FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "box" => Ok(RenderStyle::Box),
            "brackets" => Ok(RenderStyle::Brackets),
            "grid" => Ok(RenderStyle::Grid),
            "simple" => Ok(RenderStyle::Simple),
            other => Err(format!(
                "Unknown style '{}' (expected box, brackets, grid or simple)",
                other
            )),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a matrix to a multi-line string in the given style
///
/// # Example
///
/// ```rust
/// use det_rs::matrix::Matrix;
/// use det_rs::output::{format_matrix, RenderStyle};
///
/// let m = Matrix::from_integers(&[vec![1, 2], vec![3, 4]]).unwrap();
/// let text = format_matrix(&m, RenderStyle::Simple);
/// assert_eq!(text, "1 2\n3 4");
/// ```
pub fn format_matrix(matrix: &Matrix, style: RenderStyle) -> String {
    // ====== Step 1: Measure Columns ======

    let n = matrix.size();
    let cells: Vec<Vec<String>> = matrix
        .rows()
        .map(|row| row.iter().map(|entry| entry.to_string()).collect())
        .collect();

    let mut widths = vec![0usize; n];
    for row in &cells {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.chars().count());
        }
    }

    // ====== Step 2: Lay Out ======

    let mut lines: Vec<String> = Vec::new();
    match style {
        RenderStyle::Box => {
            // Inner width: per-cell "  {cell}" plus one trailing space
            let inner: usize = widths.iter().map(|w| w + 2).sum::<usize>() + 1;
            lines.push(format!("┌{}┐", " ".repeat(inner)));
            for row in &cells {
                let mut line = String::from("│");
                for (j, cell) in row.iter().enumerate() {
                    line.push_str(&format!("  {:>width$}", cell, width = widths[j]));
                }
                line.push_str(" │");
                lines.push(line);
            }
            lines.push(format!("└{}┘", " ".repeat(inner)));
        }
        RenderStyle::Brackets => {
            for row in &cells {
                let mut line = String::from("[");
                for (j, cell) in row.iter().enumerate() {
                    line.push_str(&format!("  {:>width$}", cell, width = widths[j]));
                }
                line.push_str(" ]");
                lines.push(line);
            }
        }
        RenderStyle::Grid => {
            let rule: String = {
                let mut r = String::from("+");
                for width in &widths {
                    r.push_str(&"-".repeat(width + 2));
                    r.push('+');
                }
                r
            };
            lines.push(rule.clone());
            for row in &cells {
                let mut line = String::from("|");
                for (j, cell) in row.iter().enumerate() {
                    line.push_str(&format!(" {:>width$} |", cell, width = widths[j]));
                }
                lines.push(line);
                lines.push(rule.clone());
            }
        }
        RenderStyle::Simple => {
            for row in &cells {
                let padded: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(j, cell)| format!("{:>width$}", cell, width = widths[j]))
                    .collect();
                lines.push(padded.join(" "));
            }
        }
    }

    lines.join("\n")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Entry;

    fn magic() -> Matrix {
        Matrix::from_integers(&[vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]).unwrap()
    }

    #[test]
    fn test_simple_style() {
        let m = Matrix::from_integers(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(format_matrix(&m, RenderStyle::Simple), "1 2\n3 4");
    }

    #[test]
    fn test_simple_style_aligns_columns() {
        let m = Matrix::from_integers(&[vec![1, 200], vec![30, 4]]).unwrap();
        assert_eq!(format_matrix(&m, RenderStyle::Simple), " 1 200\n30   4");
    }

    #[test]
    fn test_brackets_style() {
        let text = format_matrix(&magic(), RenderStyle::Brackets);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[  2  7  6 ]");
        assert_eq!(lines[2], "[  4  3  8 ]");
    }

    #[test]
    fn test_box_style_frame() {
        let text = format_matrix(&magic(), RenderStyle::Box);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert!(lines[4].starts_with('└') && lines[4].ends_with('┘'));
        assert!(lines[1].contains("2  7  6"));
        // Every body line has the same visible width as the frame
        let frame_width = lines[0].chars().count();
        for line in &lines {
            assert_eq!(line.chars().count(), frame_width);
        }
    }

    #[test]
    fn test_grid_style_rules() {
        let text = format_matrix(&magic(), RenderStyle::Grid);
        let lines: Vec<&str> = text.lines().collect();
        // rule, row, rule, row, rule, row, rule
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "+---+---+---+");
        assert_eq!(lines[1], "| 2 | 7 | 6 |");
    }

    #[test]
    fn test_rationals_render_as_fractions() {
        let m = Matrix::from_rows(vec![
            vec![Entry::integer(1), Entry::rational(1, 2).unwrap()],
            vec![Entry::rational(1, 2).unwrap(), Entry::rational(1, 3).unwrap()],
        ])
        .unwrap();
        let text = format_matrix(&m, RenderStyle::Simple);
        assert!(text.contains("1/2"));
        assert!(text.contains("1/3"));
        assert!(!text.contains("0.5"));
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("grid".parse::<RenderStyle>().unwrap(), RenderStyle::Grid);
        assert_eq!("BOX".parse::<RenderStyle>().unwrap(), RenderStyle::Box);
        assert!("fancy".parse::<RenderStyle>().is_err());
    }

    #[test]
    fn test_style_names_round_trip() {
        for style in RenderStyle::ALL {
            assert_eq!(style.name().parse::<RenderStyle>().unwrap(), style);
        }
    }
}
