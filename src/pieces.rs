//! Puzzle piece definitions.
//!
//! Each piece is a named polyomino given as a 0/1 matrix. The month + day
//! board uses eight pieces covering 41 cells; the weekday board adds a
//! ninth piece for its six extra cells.

use crate::geometry::{all_orientations, Shape};
use crate::layout::Variant;

/// A puzzle piece: canonical shape plus its precomputed orientations.
///
/// Pieces are immutable once built; the orientation list keeps the
/// generation order from [`all_orientations`].
pub struct Piece {
    pub id: usize,
    pub name: &'static str,
    pub base: Shape,
    pub orientations: Vec<Shape>,
}

impl Piece {
    fn new(id: usize, name: &'static str, rows: &[&[u8]]) -> Self {
        let base = Shape::from_rows(rows);
        let orientations = all_orientations(&base);
        Self {
            id,
            name,
            base,
            orientations,
        }
    }

    /// Number of grid cells the piece covers.
    pub fn cell_count(&self) -> usize {
        self.base.cell_count()
    }
}

/// The eight pieces shared by both boards, 41 cells in total.
const BASE_PIECES: &[(&str, &[&[u8]])] = &[
    // 2x3 rectangle (6 cells)
    ("Rect", &[&[1, 1, 1], &[1, 1, 1]]),
    // U pentomino
    ("U", &[&[1, 0, 1], &[1, 1, 1]]),
    // L pentomino
    ("L", &[&[1, 0, 0, 0], &[1, 1, 1, 1]]),
    // P pentomino
    ("P", &[&[1, 1], &[1, 1], &[1, 0]]),
    // N pentomino
    ("N", &[&[0, 1], &[1, 1], &[1, 0], &[1, 0]]),
    // Z pentomino
    ("Z", &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
    // Y pentomino
    ("Y", &[&[0, 1], &[1, 1], &[0, 1], &[0, 1]]),
    // V pentomino
    ("V", &[&[1, 0, 0], &[1, 0, 0], &[1, 1, 1]]),
];

/// Staircase hexomino for the weekday board, bringing the total to 47 cells.
const WEEKDAY_EXTRA: (&str, &[&[u8]]) = ("Steps", &[&[1, 0, 0], &[1, 1, 0], &[1, 1, 1]]);

/// Builds the closed piece catalog for a variant.
///
/// Piece ids are assigned in catalog order and double as the availability
/// bit positions and the occupancy markers in the grid.
pub fn catalog(variant: Variant) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = BASE_PIECES
        .iter()
        .enumerate()
        .map(|(id, &(name, rows))| Piece::new(id, name, rows))
        .collect();

    if variant == Variant::MonthDayWeekday {
        let (name, rows) = WEEKDAY_EXTRA;
        pieces.push(Piece::new(pieces.len(), name, rows));
    }

    pieces
}
