//! A heuristic best-first Sokoban solver: given a static grid and an initial
//! pusher/crate configuration, searches for a legal move sequence that drives
//! every crate onto a goal within a fixed wall-clock budget.
//!
//! Level-file parsing, animated display, and any interactive "free play"
//! mode are explicitly out of scope — callers hand this crate a parsed board
//! and consume the returned move string. See `levels` for an XSB loader used
//! only by the demo binary, not part of this contract.

pub mod bits;
pub mod board;
pub mod deadlock;
pub mod error;
pub mod geometry;
pub mod heuristic;
pub mod levels;
pub mod pqueue;
pub mod search;
pub mod solver;
pub mod state;
pub mod zobrist;

pub use board::Board;
pub use error::BoardError;
pub use geometry::{Cell, Direction};
pub use solver::{SolveOutcome, Solver, SolverOpts};
pub use state::State;

/// The external `solve` operation from spec §6:
/// `solve(width, height, mapData, itemsData) -> string | null`.
///
/// `map_data[r]` uses `'#'`/`'.'`/`' '` for wall/goal/floor; `items_data[r]`
/// uses `'@'`/`'$'`/`' '` for pusher/crate/empty, one row per board row.
/// Returns `Ok(Some(moves))` on success, `Ok(None)` if no solution was found
/// within `opts`'s time budget, or `Err` on malformed input.
pub fn solve(
    width: usize,
    height: usize,
    map_data: &[&str],
    items_data: &[&str],
    opts: SolverOpts,
) -> Result<Option<String>, BoardError> {
    let board = Board::new(width, height, map_data)?;
    let (pusher, crates) = solver::parse_items(&board, items_data)?;
    let solver = Solver::new(board);
    Ok(solver.solve(pusher, crates, opts).into_move_string())
}

/// Splits a single combined XSB diagram (one character per cell drawn from
/// `{'#',' ','.','$','@','*','+'}`) into the `(width, height, mapData,
/// itemsData)` tuple the two-grid `solve` contract expects. Shared by
/// `solve_from_text` and the `levels` module's multi-level parser.
pub fn split_xsb(text: &str) -> (usize, usize, Vec<String>, Vec<String>) {
    let lines: Vec<&str> = text.lines().collect();
    let height = lines.len();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut map_rows: Vec<String> = Vec::with_capacity(height);
    let mut items_rows: Vec<String> = Vec::with_capacity(height);

    for line in &lines {
        let mut map_row = String::with_capacity(width);
        let mut items_row = String::with_capacity(width);
        let chars: Vec<char> = line.chars().collect();
        for col in 0..width {
            let ch = chars.get(col).copied().unwrap_or(' ');
            let (map_ch, item_ch) = match ch {
                '#' => ('#', ' '),
                '.' => ('.', ' '),
                '*' => ('.', '$'),
                '+' => ('.', '@'),
                '$' => (' ', '$'),
                '@' => (' ', '@'),
                _ => (' ', ' '),
            };
            map_row.push(map_ch);
            items_row.push(item_ch);
        }
        map_rows.push(map_row);
        items_rows.push(items_row);
    }

    (width, height, map_rows, items_rows)
}

/// Parse a single combined XSB diagram and solve it, per §11's convenience
/// constructor. Splits the combined grid into the `mapData`/`itemsData` pair
/// `solve` expects rather than replacing that two-grid contract.
pub fn solve_from_text(text: &str, opts: SolverOpts) -> Result<Option<String>, BoardError> {
    let (width, height, map_rows, items_rows) = split_xsb(text);
    let map_refs: Vec<&str> = map_rows.iter().map(|s| s.as_str()).collect();
    let items_refs: Vec<&str> = items_rows.iter().map(|s| s.as_str()).collect();
    solve(width, height, &map_refs, &items_refs, opts)
}
