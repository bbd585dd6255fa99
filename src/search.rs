//! The best-first search loop: frontier, closed set, successor generation
//! through the deadlock filter, and the deadline-bounded termination
//! contract described in spec §4.6 and §5.

use crate::board::Board;
use crate::deadlock;
use crate::geometry::ALL_DIRECTIONS;
use crate::pqueue::Frontier;
use crate::state::State;
use crate::zobrist::ZobristTable;
use std::collections::HashSet;
use std::time::Instant;

/// Outcome of a search run, distinguishing "provably no solution" from
/// "ran out of time before the frontier was exhausted" per spec §7/§11.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(String),
    NoSolution,
    TimedOut,
}

/// Drives the frontier/closed-set loop to completion, a deadline, or
/// frontier exhaustion. The goal test on a popped state always wins over an
/// expired deadline; `deadline` is otherwise checked once per expanded state,
/// gating whether that state's successors get generated.
pub fn search(
    board: &Board,
    zobrist: &ZobristTable,
    initial: State,
    deadline: Option<Instant>,
) -> (SearchOutcome, usize) {
    let mut frontier = Frontier::new();
    let mut closed: HashSet<u64> = HashSet::new();
    let mut states_explored = 0usize;

    frontier.push(initial);

    loop {
        let Some(state) = frontier.pop_min() else {
            return (SearchOutcome::NoSolution, states_explored);
        };

        if state.is_solved(board) {
            return (SearchOutcome::Solved(state.path().to_string()), states_explored);
        }

        if closed.contains(&state.hash()) {
            continue;
        }

        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                return (SearchOutcome::TimedOut, states_explored);
            }
        }

        closed.insert(state.hash());
        states_explored += 1;

        for dir in ALL_DIRECTIONS {
            let Some(successor) = state.try_move(board, zobrist, dir) else {
                continue;
            };
            if closed.contains(&successor.hash()) {
                continue;
            }
            if deadlock::is_deadlocked(&successor, board) {
                continue;
            }
            frontier.push(successor);
        }
    }
}
