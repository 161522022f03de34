pub mod game;

pub use game::{Board, CellIndex, Position, BOARD_SIZE};
