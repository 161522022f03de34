use serde::{Deserialize, Serialize};

/// Number of cells along one side of the board
pub const BOARD_WIDTH: usize = 4;
/// Total number of cells on the board
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Index of a cell, 0-15 in row-major order
pub type CellIndex = usize;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn from_index(index: CellIndex) -> Self {
        Self {
            row: index / BOARD_WIDTH,
            col: index % BOARD_WIDTH,
        }
    }
}

/// The 16-letter grid for one session. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    letters: [char; BOARD_SIZE],
}

impl Board {
    pub fn from_letters(letters: [char; BOARD_SIZE]) -> Self {
        Self { letters }
    }

    pub fn letters(&self) -> &[char; BOARD_SIZE] {
        &self.letters
    }

    /// Letter at a cell, or `None` when the index is off the board
    pub fn letter(&self, index: CellIndex) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// The letters laid out as four rows of four
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.letters
            .chunks(BOARD_WIDTH)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Concatenate the letters under a path of cell indices
    pub fn word_for(&self, path: &[CellIndex]) -> String {
        path.iter().filter_map(|&index| self.letter(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board::from_letters([
            'S', 'P', 'A', 'T', //
            'R', 'E', 'I', 'N', //
            'K', 'L', 'M', 'O', //
            'B', 'C', 'D', 'F',
        ])
    }

    #[test]
    fn test_position_from_index() {
        assert_eq!(Position::from_index(0), Position { row: 0, col: 0 });
        assert_eq!(Position::from_index(6), Position { row: 1, col: 2 });
        assert_eq!(Position::from_index(15), Position { row: 3, col: 3 });
    }

    #[test]
    fn test_word_for_path() {
        let board = sample_board();
        assert_eq!(board.word_for(&[0, 1, 2]), "SPA");
        assert_eq!(board.word_for(&[]), "");
    }

    #[test]
    fn test_letter_out_of_range() {
        let board = sample_board();
        assert_eq!(board.letter(3), Some('T'));
        assert_eq!(board.letter(BOARD_SIZE), None);
    }

    #[test]
    fn test_rows_layout() {
        let rows = sample_board().rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], vec!['R', 'E', 'I', 'N']);
    }
}
