use common::coordinates::{Square, BOARD_SIZE};

use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let square = Square::new(row, col);
                let cell = match self.get(square) {
                    Some(piece) => piece.symbol(),
                    None if square.is_dark() => '·',
                    None => ' ',
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[macro_export]
macro_rules! checkers_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        // The first character is row 0 (the top of the board, WHITE's home
        // side), so the layout reads exactly as the board is printed.
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let piece = $crate::board::piece::Piece::from_char(c)
                    .expect("Invalid character in checkers position");
                board
                    .put($crate::Square::from_index(i), piece)
                    .expect("each square is filled once");
            }
        }
        board
    }};
}
