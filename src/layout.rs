//! Calendar board layouts and date-to-cell mapping.
//!
//! Two boards exist: the classic month + day board and the larger board that
//! also carries the weekdays. A layout row marks playable cells with 1 and
//! walls with 0; the solver blocks the cells for the date being displayed on
//! top of that before searching.

use crate::grid::CellPos;

/// Which calendar puzzle is being solved.
///
/// The variant decides the board layout and the piece catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 7x7 board showing month and day.
    MonthDay,
    /// 8x7 board showing month, day and weekday.
    MonthDayWeekday,
}

/// Month + day board.
///
/// Months occupy rows 0-1 (six columns each), days 1-28 fill rows 2-5 and
/// days 29-31 sit on row 6.
const MONTH_DAY_LAYOUT: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 0, 0, 0, 0],
];

/// Month + day + weekday board.
///
/// Same top as the month + day board; row 6 continues with Mon-Thu after the
/// days 29-31, and Fri-Sun close row 7.
const MONTH_DAY_WEEKDAY_LAYOUT: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[0, 0, 0, 0, 1, 1, 1],
];

impl Variant {
    /// The playable/wall table for this variant.
    pub fn layout(self) -> &'static [&'static [u8]] {
        match self {
            Variant::MonthDay => MONTH_DAY_LAYOUT,
            Variant::MonthDayWeekday => MONTH_DAY_WEEKDAY_LAYOUT,
        }
    }
}

/// Month display names, indexed by month index (0 = January).
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Weekday display names, indexed by weekday index (0 = Monday).
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Cell showing a month. `month` is the 0-based month index.
pub fn month_cell(month: usize) -> CellPos {
    debug_assert!(month < 12);
    if month < 6 {
        (0, month)
    } else {
        (1, month - 6)
    }
}

/// Cell showing a day of the month. `day` is the 1-based day number.
pub fn day_cell(day: usize) -> CellPos {
    debug_assert!((1..=31).contains(&day));
    if day <= 28 {
        let idx = day - 1;
        (2 + idx / 7, idx % 7)
    } else {
        (6, day - 29)
    }
}

/// Cell showing a weekday, or `None` for the variant without weekdays.
/// `weekday` is the 0-based weekday index (0 = Monday).
pub fn weekday_cell(variant: Variant, weekday: usize) -> Option<CellPos> {
    debug_assert!(weekday < 7);
    if variant != Variant::MonthDayWeekday {
        return None;
    }
    // Mon-Thu follow the days on row 6, Fri-Sun close row 7
    Some(if weekday <= 3 {
        (6, 3 + weekday)
    } else {
        (7, weekday)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces;

    #[test]
    fn test_layouts_are_rectangular() {
        for variant in [Variant::MonthDay, Variant::MonthDayWeekday] {
            let layout = variant.layout();
            assert!(layout.iter().all(|row| row.len() == layout[0].len()));
        }
    }

    #[test]
    fn test_month_cells_span_the_top_two_rows() {
        assert_eq!(month_cell(0), (0, 0));
        assert_eq!(month_cell(5), (0, 5));
        assert_eq!(month_cell(6), (1, 0));
        assert_eq!(month_cell(11), (1, 5));
    }

    #[test]
    fn test_day_cells_wrap_at_seven_columns() {
        assert_eq!(day_cell(1), (2, 0));
        assert_eq!(day_cell(7), (2, 6));
        assert_eq!(day_cell(8), (3, 0));
        assert_eq!(day_cell(28), (5, 6));
        assert_eq!(day_cell(29), (6, 0));
        assert_eq!(day_cell(31), (6, 2));
    }

    #[test]
    fn test_weekday_cells_exist_only_on_the_larger_board() {
        assert_eq!(weekday_cell(Variant::MonthDay, 0), None);
        assert_eq!(weekday_cell(Variant::MonthDayWeekday, 0), Some((6, 3)));
        assert_eq!(weekday_cell(Variant::MonthDayWeekday, 3), Some((6, 6)));
        assert_eq!(weekday_cell(Variant::MonthDayWeekday, 4), Some((7, 4)));
        assert_eq!(weekday_cell(Variant::MonthDayWeekday, 6), Some((7, 6)));
    }

    #[test]
    fn test_target_cells_land_on_playable_cells() {
        for month in 0..12 {
            let (r, c) = month_cell(month);
            assert_eq!(MONTH_DAY_LAYOUT[r][c], 1);
        }
        for day in 1..=31 {
            let (r, c) = day_cell(day);
            assert_eq!(MONTH_DAY_LAYOUT[r][c], 1);
        }
        for weekday in 0..7 {
            let (r, c) = weekday_cell(Variant::MonthDayWeekday, weekday).unwrap();
            assert_eq!(MONTH_DAY_WEEKDAY_LAYOUT[r][c], 1);
        }
    }

    #[test]
    fn test_playable_cells_match_piece_totals() {
        // playable minus blocked targets must equal the catalog cell sum,
        // otherwise every search would come up empty
        for (variant, targets) in [(Variant::MonthDay, 2), (Variant::MonthDayWeekday, 3)] {
            let playable: usize = variant
                .layout()
                .iter()
                .map(|row| row.iter().filter(|&&cell| cell == 1).count())
                .sum();
            let piece_cells: usize = pieces::catalog(variant)
                .iter()
                .map(|piece| piece.cell_count())
                .sum();
            assert_eq!(playable - targets, piece_cells);
        }
    }
}
