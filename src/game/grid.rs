use rand::{
    seq::{IndexedRandom, SliceRandom},
    Rng,
};

use crate::{
    models::{Board, CellIndex, Position, BOARD_SIZE},
    utils::letters::{CONSONANTS, VOWELS},
};

/// Distinct vowels placed on every board
pub const VOWELS_PER_BOARD: usize = 3;
/// Consonants placed on every board (repeats allowed)
pub const CONSONANTS_PER_BOARD: usize = BOARD_SIZE - VOWELS_PER_BOARD;

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a new 4x4 board from the thread-local RNG
    pub fn generate() -> Board {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate a board with 3 distinct vowels and 13 consonants, shuffled
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Board {
        let mut letters = [' '; BOARD_SIZE];

        for (slot, vowel) in letters
            .iter_mut()
            .zip(VOWELS.choose_multiple(rng, VOWELS_PER_BOARD))
        {
            *slot = *vowel;
        }

        for slot in letters
            .iter_mut()
            .skip(VOWELS_PER_BOARD)
            .take(CONSONANTS_PER_BOARD)
        {
            let idx = rng.random_range(0..CONSONANTS.len());
            *slot = CONSONANTS[idx];
        }

        letters.shuffle(rng);
        Board::from_letters(letters)
    }
}

/// Check if two cells are adjacent (King's move, including diagonals)
pub fn are_adjacent(a: CellIndex, b: CellIndex) -> bool {
    if a >= BOARD_SIZE || b >= BOARD_SIZE || a == b {
        return false;
    }

    let pos1 = Position::from_index(a);
    let pos2 = Position::from_index(b);
    pos1.row.abs_diff(pos2.row) <= 1 && pos1.col.abs_diff(pos2.col) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::letters::is_vowel;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_grid_composition() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let board = GridGenerator::generate_with(&mut rng);
            let vowels: Vec<char> = board
                .letters()
                .iter()
                .copied()
                .filter(|&ch| is_vowel(ch))
                .collect();
            let distinct: HashSet<char> = vowels.iter().copied().collect();

            assert_eq!(board.letters().len(), 16);
            assert_eq!(vowels.len(), 3, "board {:?} should have 3 vowels", board);
            assert_eq!(distinct.len(), 3, "vowels on {:?} should be distinct", board);
            assert_eq!(
                board
                    .letters()
                    .iter()
                    .filter(|&&ch| CONSONANTS.contains(&ch))
                    .count(),
                13
            );
        }
    }

    #[test]
    fn test_grid_is_shuffled() {
        // Vowels must not always land in the first three cells
        let mut rng = StdRng::seed_from_u64(11);
        let front_loaded = (0..50)
            .map(|_| GridGenerator::generate_with(&mut rng))
            .filter(|board| board.letters()[..3].iter().all(|&ch| is_vowel(ch)))
            .count();
        assert!(front_loaded < 50);
    }

    #[test]
    fn test_thread_rng_generation() {
        let board = GridGenerator::generate();
        assert_eq!(board.letters().iter().filter(|&&ch| is_vowel(ch)).count(), 3);
    }

    #[test]
    fn test_adjacency_matches_row_col_rule() {
        for i in 0..BOARD_SIZE {
            for j in 0..BOARD_SIZE {
                if i == j {
                    assert!(!are_adjacent(i, j));
                    continue;
                }
                let expected = (i / 4).abs_diff(j / 4) <= 1 && (i % 4).abs_diff(j % 4) <= 1;
                assert_eq!(are_adjacent(i, j), expected, "cells {} and {}", i, j);
            }
        }
    }

    #[test]
    fn test_adjacent_positions() {
        assert!(are_adjacent(0, 1));
        assert!(are_adjacent(1, 6));
        assert!(!are_adjacent(0, 3));
        assert!(!are_adjacent(3, 4), "row wrap is not adjacency");
        assert!(!are_adjacent(15, 16));
    }
}
