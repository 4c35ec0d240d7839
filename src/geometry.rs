//! 2D shape representation and orientation generation.
//!
//! A free polyomino has up to 8 orientations in the plane: 4 rotations,
//! each optionally mirrored. Symmetric pieces produce fewer.

use rustc_hash::FxHashSet;

/// A polyomino shape in its minimal bounding box.
///
/// Filled cells are stored as `(row, col)` offsets in row-major order, so the
/// struct doubles as a hashable normal form: two shapes are equal exactly
/// when they cover the same cells of the same bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: Vec<(u8, u8)>,
}

impl Shape {
    /// Builds a shape from a 0/1 matrix, trimming empty border rows and
    /// columns so the bounding box is minimal.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &filled) in row.iter().enumerate() {
                if filled != 0 {
                    cells.push((r as u8, c as u8));
                }
            }
        }
        assert!(!cells.is_empty(), "shape must contain at least one cell");
        Self::from_cells(cells)
    }

    /// Normalizes a non-empty cell list: translate the minimum row/column to
    /// the origin and sort row-major.
    fn from_cells(mut cells: Vec<(u8, u8)>) -> Self {
        let min_row = cells.iter().map(|&(r, _)| r).min().unwrap();
        let min_col = cells.iter().map(|&(_, c)| c).min().unwrap();
        for (r, c) in &mut cells {
            *r -= min_row;
            *c -= min_col;
        }
        cells.sort_unstable();

        let rows = cells.iter().map(|&(r, _)| r).max().unwrap() as usize + 1;
        let cols = cells.iter().map(|&(_, c)| c).max().unwrap() as usize + 1;
        Self { rows, cols, cells }
    }

    /// Height of the bounding box.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width of the bounding box.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Filled cells as `(row, col)` offsets, row-major.
    #[inline]
    pub fn cells(&self) -> &[(u8, u8)] {
        &self.cells
    }

    /// Number of filled cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The shape rotated 90 degrees clockwise.
    ///
    /// An HxW shape becomes WxH, with cell `(r, c)` moving to `(c, H-1-r)`.
    pub fn rotated_cw(&self) -> Self {
        let height = self.rows as u8;
        let cells = self
            .cells
            .iter()
            .map(|&(r, c)| (c, height - 1 - r))
            .collect();
        Self::from_cells(cells)
    }

    /// The shape mirrored horizontally (each row reversed).
    pub fn mirrored(&self) -> Self {
        let width = self.cols as u8;
        let cells = self
            .cells
            .iter()
            .map(|&(r, c)| (r, width - 1 - c))
            .collect();
        Self::from_cells(cells)
    }
}

/// Generates all distinct orientations of a shape.
///
/// Walks the 4 rotations and records each together with its horizontal
/// mirror, keeping the first occurrence of every distinct shape. The
/// resulting order (rotation-major, mirror-minor, starting from the base
/// shape) is what fixes the solver's enumeration order, so it must not be
/// re-sorted.
pub fn all_orientations(base: &Shape) -> Vec<Shape> {
    let mut seen = FxHashSet::default();
    let mut orientations = Vec::new();

    let mut current = base.clone();
    for _ in 0..4 {
        if seen.insert(current.clone()) {
            orientations.push(current.clone());
        }
        let mirrored = current.mirrored();
        if seen.insert(mirrored.clone()) {
            orientations.push(mirrored);
        }
        current = current.rotated_cw();
    }

    orientations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_tromino() -> Shape {
        Shape::from_rows(&[&[1, 0], &[1, 1]])
    }

    #[test]
    fn test_from_rows_trims_empty_borders() {
        let padded = Shape::from_rows(&[&[0, 0, 0], &[0, 1, 0], &[0, 1, 1]]);
        assert_eq!(padded, l_tromino());
        assert_eq!(padded.rows(), 2);
        assert_eq!(padded.cols(), 2);
    }

    #[test]
    fn test_rotation_moves_cells_clockwise() {
        let rotated = l_tromino().rotated_cw();
        assert_eq!(rotated.cells(), &[(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_four_rotations_return_to_base() {
        let base = l_tromino();
        let back = base.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, base);
    }

    #[test]
    fn test_mirror_is_an_involution() {
        let base = l_tromino();
        assert_eq!(base.mirrored().mirrored(), base);
    }

    #[test]
    fn test_orientations_start_with_base_shape() {
        let base = l_tromino();
        let orientations = all_orientations(&base);
        assert_eq!(orientations[0], base);
    }

    #[test]
    fn test_monomino_has_a_single_orientation() {
        let dot = Shape::from_rows(&[&[1]]);
        assert_eq!(all_orientations(&dot).len(), 1);
    }

    #[test]
    fn test_l_tromino_has_four_orientations() {
        // mirror-symmetric along the diagonal, so only the rotations remain
        assert_eq!(all_orientations(&l_tromino()).len(), 4);
    }

    #[test]
    fn test_generation_order_is_reproducible() {
        let base = Shape::from_rows(&[&[1, 0, 0, 0], &[1, 1, 1, 1]]);
        assert_eq!(all_orientations(&base), all_orientations(&base));
    }

    #[test]
    fn test_every_orientation_is_a_rotation_or_mirrored_rotation() {
        for piece in crate::pieces::catalog(crate::layout::Variant::MonthDayWeekday) {
            let mut reachable = Vec::new();
            let mut current = piece.base.clone();
            for _ in 0..4 {
                reachable.push(current.clone());
                reachable.push(current.mirrored());
                current = current.rotated_cw();
            }
            for orientation in &piece.orientations {
                assert!(
                    reachable.contains(orientation),
                    "{}: unreachable orientation",
                    piece.name
                );
            }
        }
    }
}
