//! Search guidance: a cheap, non-admissible lower-bound estimate of how far
//! a state is from solved, used only to order the frontier. Greedy nearest-
//! pair matching on raw Manhattan distance, not an optimal (Hungarian)
//! assignment, so the estimate can occasionally overshoot the true cost.

use crate::board::Board;
use crate::geometry::Cell;

fn manhattan(a: Cell, b: Cell) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Greedily pair each crate with its nearest remaining goal, summing the
/// distances. Runs in O(|crates| * |goals|); returns 0 iff every crate is
/// already on some goal.
pub fn estimate(board: &Board, crates: &[Cell]) -> u32 {
    let goals = board.goals();

    let mut crates_left: Vec<Cell> = crates.to_vec();
    let mut goals_left: Vec<Cell> = goals.to_vec();
    let mut total = 0u32;

    while !crates_left.is_empty() && !goals_left.is_empty() {
        let mut best: Option<(usize, usize, u32)> = None;
        for (ci, &c) in crates_left.iter().enumerate() {
            for (gi, &g) in goals_left.iter().enumerate() {
                let d = manhattan(c, g);
                if best.is_none_or(|(_, _, best_d)| d < best_d) {
                    best = Some((ci, gi, d));
                }
            }
        }

        let (ci, gi, d) = best.expect("both pools non-empty");
        total += d;
        crates_left.swap_remove(ci);
        goals_left.swap_remove(gi);
    }

    total
}
