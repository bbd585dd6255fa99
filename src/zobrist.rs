//! Incremental positional hashing (Zobrist-style): a random 64-bit value per
//! (cell, piece-kind), XORed in and out as the pusher walks and crates move.

use crate::bits::MAX_SIZE;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fixed seed so hashes (and therefore closed-set behavior) are reproducible
/// across runs on the same board.
const SEED: u64 = 0x123456789abcdef0;

/// Table of random hash values, one per (row, col) for each piece kind that
/// participates in a game state: the pusher and a crate.
pub struct ZobristTable {
    pusher: [[u64; MAX_SIZE]; MAX_SIZE],
    crate_: [[u64; MAX_SIZE]; MAX_SIZE],
}

impl ZobristTable {
    pub fn new() -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);

        let mut pusher = [[0u64; MAX_SIZE]; MAX_SIZE];
        for row in pusher.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.next_u64();
            }
        }

        let mut crate_ = [[0u64; MAX_SIZE]; MAX_SIZE];
        for row in crate_.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.next_u64();
            }
        }

        ZobristTable { pusher, crate_ }
    }

    pub fn pusher_hash(&self, row: usize, col: usize) -> u64 {
        self.pusher[row][col]
    }

    pub fn crate_hash(&self, row: usize, col: usize) -> u64 {
        self.crate_[row][col]
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible() {
        let a = ZobristTable::new();
        let b = ZobristTable::new();
        assert_eq!(a.pusher_hash(3, 4), b.pusher_hash(3, 4));
        assert_eq!(a.crate_hash(1, 1), b.crate_hash(1, 1));
    }

    #[test]
    fn test_pusher_and_crate_tables_differ() {
        let t = ZobristTable::new();
        assert_ne!(t.pusher_hash(0, 0), t.crate_hash(0, 0));
    }

    #[test]
    fn test_distinct_cells_differ() {
        let t = ZobristTable::new();
        assert_ne!(t.pusher_hash(0, 0), t.pusher_hash(0, 1));
    }
}
