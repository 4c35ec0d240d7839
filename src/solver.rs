//! Backtracking search over the calendar board.
//!
//! One recursion serves three execution disciplines:
//! - batch: run to completion synchronously
//! - animated: report every place/remove and sleep between steps
//! - live: stream solutions as they are found, yielding periodically so a
//!   cooperative scheduler can interleave other work
//!
//! The discipline lives in a [`Pacer`] passed down the recursion; the search
//! itself is identical in all three modes, which keeps enumeration order
//! reproducible.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::yield_now;
use tokio::time::sleep;

use crate::grid::{Board, Cell, CellPos};
use crate::layout::{self, Variant};
use crate::pieces::{self, Piece};

/// Place/remove steps between scheduler yields in live mode.
const LIVE_YIELD_INTERVAL: u32 = 256;

/// Cloneable handle for cancelling a search the owner is currently awaiting.
#[derive(Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Sets the cooperative stop flag; the search unwinds at its next check.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Suspension and callback behavior for one search mode.
enum Pacer<'cb> {
    /// No suspension points; the search future completes in a single poll.
    Batch,
    /// Report every step and pause so a viewer can follow along.
    Animated {
        on_update: Box<dyn FnMut(&Board) + 'cb>,
        step_delay: Duration,
    },
    /// Deliver solutions immediately, yielding to the scheduler now and then.
    Live {
        on_solution: Box<dyn FnMut(&Board) + 'cb>,
        on_count: Option<Box<dyn FnMut(usize) + 'cb>>,
        steps: u32,
    },
}

impl Pacer<'_> {
    /// Called after every successful place and every remove.
    async fn after_step(&mut self, board: &Board) {
        match self {
            Pacer::Batch => {}
            Pacer::Animated {
                on_update,
                step_delay,
            } => {
                on_update(board);
                sleep(*step_delay).await;
            }
            Pacer::Live { steps, .. } => {
                *steps += 1;
                if *steps >= LIVE_YIELD_INTERVAL {
                    *steps = 0;
                    yield_now().await;
                }
            }
        }
    }

    /// Called once per solution, after the snapshot has been recorded.
    async fn solution_found(&mut self, board: &Board, total: usize) {
        match self {
            Pacer::Batch => {}
            Pacer::Animated {
                on_update,
                step_delay,
            } => {
                on_update(board);
                // hold the completed board on screen noticeably longer
                sleep(*step_delay * 10).await;
            }
            Pacer::Live {
                on_solution,
                on_count,
                ..
            } => {
                on_solution(board);
                if let Some(on_count) = on_count {
                    on_count(total);
                }
                yield_now().await;
            }
        }
    }
}

/// One search invocation: exclusive board access plus the shared pieces.
///
/// The availability set travels as a bitmask argument, cleared on descent
/// and intact again when a frame returns, so no frame allocates or copies.
struct Search<'a> {
    pieces: &'a [Piece],
    min_piece_cells: usize,
    limit: usize,
    board: &'a mut Board,
    solutions: &'a mut Vec<Board>,
    stopped: &'a AtomicBool,
}

impl<'a> Search<'a> {
    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Recursive backtracking step targeting the first empty cell.
    ///
    /// Recursion returns a boxed future because the async call graph is
    /// cyclic; every `place` below is matched by a `remove` before the frame
    /// returns, including on cancellation and limit unwinding.
    fn run<'s, 'cb: 's>(
        &'s mut self,
        available: u16,
        pacer: &'s mut Pacer<'cb>,
    ) -> Pin<Box<dyn Future<Output = ()> + 's>> {
        Box::pin(async move {
            if self.is_stopped() || self.solutions.len() >= self.limit {
                return;
            }

            let Some((row, col)) = self.board.find_first_empty() else {
                self.solutions.push(self.board.clone());
                let total = self.solutions.len();
                pacer.solution_found(self.board, total).await;
                return;
            };

            if is_dead_end(self.board, self.min_piece_cells) {
                return;
            }

            let pieces = self.pieces;
            for piece in pieces {
                let bit = 1u16 << piece.id;
                if available & bit == 0 {
                    continue;
                }
                if self.is_stopped() {
                    return;
                }

                for shape in &piece.orientations {
                    // anchor every filled cell of the shape on the target
                    // cell; this covers all placements that reach it
                    for &(anchor_row, anchor_col) in shape.cells() {
                        let (Some(origin_row), Some(origin_col)) = (
                            row.checked_sub(anchor_row as usize),
                            col.checked_sub(anchor_col as usize),
                        ) else {
                            continue;
                        };
                        let origin = (origin_row, origin_col);
                        if !self.board.can_place(shape, origin) {
                            continue;
                        }

                        self.board.place(shape, origin, piece.id as u8);
                        pacer.after_step(self.board).await;

                        self.run(available & !bit, pacer).await;

                        self.board.remove(shape, origin);
                        if self.is_stopped() {
                            return;
                        }
                        pacer.after_step(self.board).await;
                        if self.is_stopped() || self.solutions.len() >= self.limit {
                            return;
                        }
                    }
                }
            }
        })
    }
}

/// Tests whether the current board can no longer be completed.
///
/// Flood-fills the empty cells into 4-connected components; a component
/// smaller than the smallest piece can never be covered, so the branch is
/// hopeless as soon as one finishes under `min_region`.
pub fn is_dead_end(board: &Board, min_region: usize) -> bool {
    let rows = board.rows();
    let cols = board.cols();
    let mut visited = vec![false; rows * cols];

    for row in 0..rows {
        for col in 0..cols {
            if visited[row * cols + col] || board.cell(row, col) != Cell::Empty {
                continue;
            }

            let mut component = vec![(row, col)];
            visited[row * cols + col] = true;
            let mut head = 0;
            while head < component.len() {
                let (r, c) = component[head];
                head += 1;
                for (nr, nc) in neighbors(r, c, rows, cols) {
                    if board.cell(nr, nc) == Cell::Empty && !visited[nr * cols + nc] {
                        visited[nr * cols + nc] = true;
                        component.push((nr, nc));
                    }
                }
            }

            if component.len() < min_region {
                return true;
            }
        }
    }

    false
}

/// In-bounds 4-neighbors of a cell.
fn neighbors(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = CellPos> {
    [(0isize, 1isize), (0, -1), (1, 0), (-1, 0)]
        .into_iter()
        .filter_map(move |(dr, dc)| {
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            (nr < rows && nc < cols).then_some((nr, nc))
        })
}

/// A search over one calendar configuration.
///
/// The solver owns its board and piece catalog exclusively; concurrent
/// searches need separately constructed solvers. Solutions accumulate across
/// whichever modes are run, and `limit` arguments compare against that total.
pub struct Solver {
    board: Board,
    pieces: Vec<Piece>,
    min_piece_cells: usize,
    solutions: Vec<Board>,
    stopped: Arc<AtomicBool>,
}

impl Solver {
    /// Builds a solver with the date cells blocked.
    ///
    /// `month` is 0-based, `day` 1-based, `weekday` 0-based (Monday = 0) and
    /// only used by [`Variant::MonthDayWeekday`]. Coordinates must be in
    /// range; feasibility is not checked, an impossible configuration simply
    /// yields no solutions.
    pub fn new(variant: Variant, month: usize, day: usize, weekday: Option<usize>) -> Self {
        let mut targets = vec![layout::month_cell(month), layout::day_cell(day)];
        if let Some(weekday) = weekday {
            if let Some(cell) = layout::weekday_cell(variant, weekday) {
                targets.push(cell);
            }
        }

        let pieces = pieces::catalog(variant);
        let min_piece_cells = pieces.iter().map(Piece::cell_count).min().unwrap_or(0);

        Self {
            board: Board::new(variant, &targets),
            pieces,
            min_piece_cells,
            solutions: Vec::new(),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Exhaustive batch search, blocking until done or `limit` is reached.
    pub fn solve(&mut self, limit: usize) {
        pollster::block_on(self.drive(limit, &mut Pacer::Batch));
    }

    /// Animated search: `on_update` sees the board after every place and
    /// remove, with `step_delay` between steps and a longer hold on each
    /// solution. A limit of 1 gives the usual find-one animation.
    pub async fn solve_animated(
        &mut self,
        on_update: impl FnMut(&Board),
        step_delay: Duration,
        limit: usize,
    ) {
        let mut pacer = Pacer::Animated {
            on_update: Box::new(on_update),
            step_delay,
        };
        self.drive(limit, &mut pacer).await;
    }

    /// Streaming search: each solution is handed to `on_solution` the moment
    /// it is found, `on_count` (if any) sees the running total, and the
    /// search yields to the scheduler at regular intervals instead of
    /// sleeping.
    pub async fn solve_live(
        &mut self,
        on_solution: impl FnMut(&Board),
        on_count: Option<impl FnMut(usize)>,
        limit: usize,
    ) {
        let mut pacer = Pacer::Live {
            on_solution: Box::new(on_solution),
            on_count: on_count.map(|f| Box::new(f) as Box<dyn FnMut(usize) + '_>),
            steps: 0,
        };
        self.drive(limit, &mut pacer).await;
    }

    async fn drive(&mut self, limit: usize, pacer: &mut Pacer<'_>) {
        let available = (1u16 << self.pieces.len()) - 1;
        let mut search = Search {
            pieces: &self.pieces,
            min_piece_cells: self.min_piece_cells,
            limit,
            board: &mut self.board,
            solutions: &mut self.solutions,
            stopped: &self.stopped,
        };
        search.run(available, pacer).await;
    }

    /// Requests cooperative cancellation of the running search.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Handle for stopping this solver while a search is being awaited.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stopped))
    }

    /// Whether the stop flag has been set.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Solutions found so far, in enumeration order.
    pub fn solutions(&self) -> &[Board] {
        &self.solutions
    }

    /// The board; outside a running search this is the initial blocked grid,
    /// since every unwound placement is removed again.
    pub fn board(&self) -> &Board {
        &self.board
    }
}
