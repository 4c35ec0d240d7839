//! Calendar Puzzle Solver Library
//!
//! Core engine for calendar tiling puzzles: a fixed board of month, day and
//! (on the larger variant) weekday cells must be covered exactly by a set of
//! polyomino pieces, leaving only the cells of the displayed date open. The
//! solver enumerates tilings by backtracking and can run to completion,
//! animate its steps, or stream solutions cooperatively.

pub mod geometry;
pub mod grid;
pub mod layout;
pub mod pieces;
pub mod solver;

pub use grid::{Board, Cell};
pub use layout::Variant;
pub use solver::{Solver, StopHandle};
