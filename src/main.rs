//! Calendar Puzzle Solver
//!
//! Solves calendar tiling puzzles: polyomino pieces must cover the board
//! except for the cells showing the chosen month, day and (optionally)
//! weekday. Offers a batch search, a step-by-step terminal animation and a
//! streaming mode that prints solutions as they are found.

use std::io::Write;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use dayblock::layout::{MONTHS, WEEKDAYS};
use dayblock::{Solver, Variant};

/// Solves a calendar tiling puzzle for a given date.
#[derive(Parser)]
#[command(name = "dayblock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find solutions and print the count.
    Solve {
        #[command(flatten)]
        date: DateArgs,
        /// Stop after this many solutions.
        #[arg(long, default_value_t = 10000)]
        limit: usize,
        /// Print every solution board.
        #[arg(long)]
        show: bool,
    },
    /// Watch the search place and remove pieces step by step.
    Animate {
        #[command(flatten)]
        date: DateArgs,
        /// Milliseconds between steps.
        #[arg(long, default_value_t = 20)]
        delay_ms: u64,
        /// Stop after this many solutions.
        #[arg(long, default_value_t = 1)]
        limit: usize,
    },
    /// Stream solutions as they are found; Ctrl-C stops the search.
    Live {
        #[command(flatten)]
        date: DateArgs,
        /// Stop after this many solutions (default: run until exhausted).
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Args)]
struct DateArgs {
    /// Month to leave open (1-12).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: u8,
    /// Day of the month to leave open (1-31).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=31))]
    day: u8,
    /// Weekday to leave open (1 = Monday .. 7 = Sunday); selects the board
    /// with weekday cells.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=7))]
    weekday: Option<u8>,
}

impl DateArgs {
    fn solver(&self) -> Solver {
        let variant = if self.weekday.is_some() {
            Variant::MonthDayWeekday
        } else {
            Variant::MonthDay
        };
        Solver::new(
            variant,
            self.month as usize - 1,
            self.day as usize,
            self.weekday.map(|weekday| weekday as usize - 1),
        )
    }

    fn describe(&self) -> String {
        let date = format!("{} {}", MONTHS[self.month as usize - 1], self.day);
        match self.weekday {
            Some(weekday) => format!("{} ({})", date, WEEKDAYS[weekday as usize - 1]),
            None => date,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { date, limit, show } => run_solve(&date, limit, show),
        Command::Animate {
            date,
            delay_ms,
            limit,
        } => run_animate(&date, delay_ms, limit).await,
        Command::Live { date, limit } => run_live(&date, limit).await,
    }
}

/// Runs the blocking batch search and reports the results.
fn run_solve(date: &DateArgs, limit: usize, show: bool) {
    let mut solver = date.solver();
    solver.solve(limit);

    let solutions = solver.solutions();
    println!("Found {} solutions for {}", solutions.len(), date.describe());
    if show {
        for (i, solution) in solutions.iter().enumerate() {
            println!("\nSolution {}:\n{}", i + 1, solution.render());
        }
    }
}

/// Draws the search in place until the first solutions are found.
async fn run_animate(date: &DateArgs, delay_ms: u64, limit: usize) {
    let mut solver = date.solver();

    solver
        .solve_animated(
            |board| {
                // redraw from the top-left corner on every step
                print!("\x1b[2J\x1b[H{}", board.render());
                let _ = std::io::stdout().flush();
            },
            Duration::from_millis(delay_ms),
            limit,
        )
        .await;

    if solver.solutions().is_empty() {
        println!("No solution found for {}", date.describe());
    } else {
        println!("Solved {}", date.describe());
    }
}

/// Streams solutions as they arrive; Ctrl-C requests a cooperative stop.
async fn run_live(date: &DateArgs, limit: Option<usize>) {
    let mut solver = date.solver();

    let handle = solver.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.stop();
        }
    });

    println!("Searching {} (Ctrl-C to stop)", date.describe());
    solver
        .solve_live(
            |board| println!("{}", board.render()),
            Some(|total: usize| println!("-- {total} so far")),
            limit.unwrap_or(usize::MAX),
        )
        .await;

    if solver.is_stopped() {
        println!(
            "Stopped after {} solutions for {}",
            solver.solutions().len(),
            date.describe()
        );
    } else {
        println!(
            "Exhausted the search: {} solutions for {}",
            solver.solutions().len(),
            date.describe()
        );
    }
}

#[cfg(test)]
mod tests {
    use dayblock::{Solver, Variant};

    #[test]
    fn test_blocked_board_month_day() {
        let solver = Solver::new(Variant::MonthDay, 0, 1, None);
        insta::assert_snapshot!(solver.board().render(), @r"
        #.....#
        ......#
        #......
        .......
        .......
        .......
        ...####
        ");
    }

    #[test]
    fn test_blocked_board_month_day_weekday() {
        let solver = Solver::new(Variant::MonthDayWeekday, 11, 31, Some(6));
        insta::assert_snapshot!(solver.board().render(), @r"
        ......#
        .....##
        .......
        .......
        .......
        .......
        ..#....
        ####..#
        ");
    }
}
