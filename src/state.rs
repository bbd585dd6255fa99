//! The dynamic part of a puzzle: where the pusher and crates currently are.
//! `State`s are conceptually immutable once built — `try_move` returns a
//! fresh successor rather than mutating `self` — so they can be threaded
//! through the frontier without aliasing trouble. The crate list is
//! reference-counted and only cloned when a push actually changes it; a walk
//! shares its parent's crate list outright.

use crate::board::{Board, Tile};
use crate::geometry::{Cell, Direction};
use crate::heuristic;
use crate::zobrist::ZobristTable;
use std::fmt;
use std::rc::Rc;

#[derive(Clone)]
pub struct State {
    pusher: Cell,
    crates: Rc<Vec<Cell>>,
    path: String,
    hash: u64,
    heuristic: u32,
}

impl State {
    /// Build the initial state from a pusher cell and an unsorted crate
    /// list, computing its hash and heuristic from scratch.
    pub fn new(board: &Board, zobrist: &ZobristTable, pusher: Cell, mut crates: Vec<Cell>) -> Self {
        crates.sort();
        let hash = Self::hash_from_scratch(zobrist, pusher, &crates);
        let heuristic = heuristic::estimate(board, &crates);
        State {
            pusher,
            crates: Rc::new(crates),
            path: String::new(),
            hash,
            heuristic,
        }
    }

    fn hash_from_scratch(zobrist: &ZobristTable, pusher: Cell, crates: &[Cell]) -> u64 {
        let mut hash = zobrist.pusher_hash(pusher.row as usize, pusher.col as usize);
        for cell in crates {
            hash ^= zobrist.crate_hash(cell.row as usize, cell.col as usize);
        }
        hash
    }

    pub fn pusher(&self) -> Cell {
        self.pusher
    }

    pub fn crates(&self) -> &[Cell] {
        &self.crates
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    pub fn has_crate_at(&self, cell: Cell) -> bool {
        self.crates.binary_search(&cell).is_ok()
    }

    fn crate_index_at(&self, cell: Cell) -> Option<usize> {
        self.crates.binary_search(&cell).ok()
    }

    /// True iff every crate sits on a goal.
    pub fn is_solved(&self, board: &Board) -> bool {
        self.crates.iter().all(|&cell| board.tile(cell) == Tile::Goal)
    }

    /// Attempt a single pusher step in `dir`. Returns `None` for a wall
    /// walk, a push into a wall, or a push into another crate.
    pub fn try_move(&self, board: &Board, zobrist: &ZobristTable, dir: Direction) -> Option<State> {
        let new_pusher = self.pusher.neighbor(dir);
        if !board.in_bounds(new_pusher) || board.tile(new_pusher) == Tile::Wall {
            return None;
        }

        match self.crate_index_at(new_pusher) {
            Some(idx) => self.try_push(board, zobrist, dir, new_pusher, idx),
            None => Some(self.walk(zobrist, new_pusher, dir)),
        }
    }

    fn walk(&self, zobrist: &ZobristTable, new_pusher: Cell, dir: Direction) -> State {
        let hash = self.hash
            ^ zobrist.pusher_hash(self.pusher.row as usize, self.pusher.col as usize)
            ^ zobrist.pusher_hash(new_pusher.row as usize, new_pusher.col as usize);

        let mut path = self.path.clone();
        path.push(dir.symbol());

        State {
            pusher: new_pusher,
            crates: Rc::clone(&self.crates),
            path,
            hash,
            heuristic: self.heuristic,
        }
    }

    fn try_push(
        &self,
        board: &Board,
        zobrist: &ZobristTable,
        dir: Direction,
        new_pusher: Cell,
        crate_idx: usize,
    ) -> Option<State> {
        let dest = new_pusher.neighbor(dir);
        if !board.in_bounds(dest) || board.tile(dest) == Tile::Wall || self.has_crate_at(dest) {
            return None;
        }

        let mut crates = (*self.crates).clone();
        crates[crate_idx] = dest;
        crates.sort();

        let hash = self.hash
            ^ zobrist.pusher_hash(self.pusher.row as usize, self.pusher.col as usize)
            ^ zobrist.pusher_hash(new_pusher.row as usize, new_pusher.col as usize)
            ^ zobrist.crate_hash(new_pusher.row as usize, new_pusher.col as usize)
            ^ zobrist.crate_hash(dest.row as usize, dest.col as usize);

        let heuristic = heuristic::estimate(board, &crates);

        let mut path = self.path.clone();
        path.push(dir.symbol());

        Some(State {
            pusher: new_pusher,
            crates: Rc::new(crates),
            path,
            hash,
            heuristic,
        })
    }

    /// A `Display`-able view of this state rendered against `board`'s grid.
    pub fn render<'a>(&'a self, board: &'a Board) -> Rendered<'a> {
        Rendered { state: self, board }
    }
}

pub struct Rendered<'a> {
    state: &'a State,
    board: &'a Board,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.board.height() {
            let mut line = String::with_capacity(self.board.width());
            for col in 0..self.board.width() {
                let cell = Cell::new(row as i32, col as i32);
                let is_pusher = cell == self.state.pusher;
                let has_crate = self.state.has_crate_at(cell);
                let tile = self.board.tile(cell);
                let ch = if is_pusher {
                    match tile {
                        Tile::Goal => '+',
                        _ => '@',
                    }
                } else if has_crate {
                    match tile {
                        Tile::Goal => '*',
                        _ => '$',
                    }
                } else {
                    match tile {
                        Tile::Wall => '#',
                        Tile::Floor => ' ',
                        Tile::Goal => '.',
                    }
                };
                line.push(ch);
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
