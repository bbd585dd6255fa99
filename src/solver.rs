//! Solver entry point: assembles the static `Board` and `ZobristTable` once,
//! builds the initial `State`, and drives `search::search` to completion.

use crate::board::Board;
use crate::error::BoardError;
use crate::geometry::Cell;
use crate::search::{self, SearchOutcome};
use crate::state::State;
use std::time::{Duration, Instant};

/// Tunable knobs for a solve run. The library API takes this explicitly
/// rather than reading environment/config state, per spec §6.
#[derive(Debug, Clone, Copy)]
pub struct SolverOpts {
    /// Soft wall-clock budget. `None` disables the deadline entirely (used
    /// by tests on tiny boards where a real clock read would be noise).
    pub time_budget: Option<Duration>,
}

impl Default for SolverOpts {
    fn default() -> Self {
        SolverOpts {
            time_budget: Some(Duration::from_secs(15)),
        }
    }
}

/// Result of a solve run, distinguishing the three outcomes the core can
/// produce (spec §7): a move string, provable unsolvability, or a deadline
/// that expired before the frontier was exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(String),
    NoSolution,
    TimedOut,
}

impl SolveOutcome {
    /// Collapses to the external `string | null` contract of spec §6: both
    /// `NoSolution` and `TimedOut` are failure from the caller's point of
    /// view.
    pub fn into_move_string(self) -> Option<String> {
        match self {
            SolveOutcome::Solved(path) => Some(path),
            SolveOutcome::NoSolution | SolveOutcome::TimedOut => None,
        }
    }
}

pub struct Solver {
    board: Board,
    zobrist: crate::zobrist::ZobristTable,
}

impl Solver {
    pub fn new(board: Board) -> Self {
        Solver {
            board,
            zobrist: crate::zobrist::ZobristTable::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run one best-first search from `pusher`/`crates` to a solved state.
    pub fn solve(&self, pusher: Cell, crates: Vec<Cell>, opts: SolverOpts) -> SolveOutcome {
        let initial = State::new(&self.board, &self.zobrist, pusher, crates);
        let deadline = opts.time_budget.map(|d| Instant::now() + d);
        let (outcome, _states_explored) = search::search(&self.board, &self.zobrist, initial, deadline);
        match outcome {
            SearchOutcome::Solved(path) => SolveOutcome::Solved(path),
            SearchOutcome::NoSolution => SolveOutcome::NoSolution,
            SearchOutcome::TimedOut => SolveOutcome::TimedOut,
        }
    }

    /// Same as `solve`, but also returns the number of states popped and
    /// expanded — used by the demo binary's per-level reporting and by
    /// tests that check pruning actually bounds the search.
    pub fn solve_with_stats(
        &self,
        pusher: Cell,
        crates: Vec<Cell>,
        opts: SolverOpts,
    ) -> (SolveOutcome, usize) {
        let initial = State::new(&self.board, &self.zobrist, pusher, crates);
        let deadline = opts.time_budget.map(|d| Instant::now() + d);
        let (outcome, states_explored) = search::search(&self.board, &self.zobrist, initial, deadline);
        let outcome = match outcome {
            SearchOutcome::Solved(path) => SolveOutcome::Solved(path),
            SearchOutcome::NoSolution => SolveOutcome::NoSolution,
            SearchOutcome::TimedOut => SolveOutcome::TimedOut,
        };
        (outcome, states_explored)
    }
}

/// Validate and split `itemsData` into the pusher cell and crate list,
/// per spec §6/§7's malformed-input taxonomy.
pub fn parse_items(board: &Board, items_data: &[&str]) -> Result<(Cell, Vec<Cell>), BoardError> {
    use crate::board::Tile;

    if items_data.len() != board.height() {
        return Err(BoardError::ShapeMismatch {
            expected_width: board.width(),
            expected_height: board.height(),
        });
    }

    let mut pusher: Option<Cell> = None;
    let mut crates = Vec::new();

    for (row, line) in items_data.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != board.width() {
            return Err(BoardError::ShapeMismatch {
                expected_width: board.width(),
                expected_height: board.height(),
            });
        }
        for (col, &ch) in chars.iter().enumerate() {
            let cell = Cell::new(row as i32, col as i32);
            match ch {
                ' ' => {}
                '@' => {
                    if pusher.is_some() {
                        return Err(BoardError::MultiplePushers);
                    }
                    pusher = Some(cell);
                }
                '$' => crates.push(cell),
                _ => return Err(BoardError::InvalidItemsChar { ch, row, col }),
            }
            if ch != ' ' && board.tile(cell) == Tile::Wall {
                return Err(BoardError::OccupiedWall { row, col });
            }
        }
    }

    let pusher = pusher.ok_or(BoardError::NoPusher)?;
    if crates.len() != board.goals().len() {
        return Err(BoardError::CrateGoalCountMismatch {
            crates: crates.len(),
            goals: board.goals().len(),
        });
    }

    Ok((pusher, crates))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::new(rows[0].len(), rows.len(), rows).unwrap()
    }

    #[test]
    fn test_parse_items_basic() {
        let b = board(&["#####", "# . #", "#   #", "#####"]);
        let items = ["     ", "  @  ", "  $  ", "     "];
        let (pusher, crates) = parse_items(&b, &items).unwrap();
        assert_eq!(pusher, Cell::new(1, 2));
        assert_eq!(crates, vec![Cell::new(2, 2)]);
    }

    #[test]
    fn test_parse_items_no_pusher() {
        let b = board(&["#####", "# . #", "#   #", "#####"]);
        let items = ["     ", "     ", "  $  ", "     "];
        assert_eq!(parse_items(&b, &items).unwrap_err(), BoardError::NoPusher);
    }

    #[test]
    fn test_parse_items_multiple_pushers() {
        let b = board(&["#####", "# . #", "#   #", "#####"]);
        let items = ["     ", " @ @ ", "  $  ", "     "];
        assert_eq!(
            parse_items(&b, &items).unwrap_err(),
            BoardError::MultiplePushers
        );
    }

    #[test]
    fn test_parse_items_crate_goal_count_mismatch() {
        let b = board(&["#####", "# . #", "#   #", "#####"]);
        let items = ["     ", "  @  ", " $$  ", "     "];
        assert_eq!(
            parse_items(&b, &items).unwrap_err(),
            BoardError::CrateGoalCountMismatch { crates: 2, goals: 1 }
        );
    }

    #[test]
    fn test_parse_items_on_wall_is_error() {
        let b = board(&["#####", "# . #", "#   #", "#####"]);
        let items = ["  @  ", "     ", "  $  ", "     "];
        assert!(matches!(
            parse_items(&b, &items),
            Err(BoardError::OccupiedWall { .. })
        ));
    }

    #[test]
    fn test_solver_solves_trivial_corridor() {
        let b = board(&["#####", "# . #", "#   #", "#####"]);
        let solver = Solver::new(b);
        let outcome = solver.solve(
            Cell::new(1, 2),
            vec![Cell::new(2, 2)],
            SolverOpts { time_budget: None },
        );
        assert!(matches!(outcome, SolveOutcome::Solved(_)));
    }

    #[test]
    fn test_solver_already_solved_returns_empty_string() {
        let b = board(&["#####", "# . #", "#####"]);
        let solver = Solver::new(b);
        let outcome = solver.solve(
            Cell::new(1, 1),
            vec![Cell::new(1, 2)],
            SolverOpts { time_budget: None },
        );
        assert_eq!(outcome, SolveOutcome::Solved(String::new()));
    }

    #[test]
    fn test_into_move_string_collapses_failure_variants() {
        assert_eq!(SolveOutcome::NoSolution.into_move_string(), None);
        assert_eq!(SolveOutcome::TimedOut.into_move_string(), None);
        assert_eq!(
            SolveOutcome::Solved("r".to_string()).into_move_string(),
            Some("r".to_string())
        );
    }
}
