use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Direction, BOARD_SIZE};

static ALGEBRAIC_SQUARE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-hA-H]{1})([1-8]{1})$").expect("square regex is valid"));

/// A cell on the 8x8 board. Row 0 is the top of the board (WHITE's home
/// side), row 7 the bottom (BLACK's home side).
///
/// Squares order row-major, which is the order pieces are enumerated in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// Builds a square from signed coordinates, returning `None` when they
    /// fall off the board.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Self {
        let size = BOARD_SIZE as usize;
        Self::new((index / size) as u8, (index % size) as u8)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Dark squares are the only playable ones.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub fn offset(self, direction: Direction) -> Option<Self> {
        Self::try_new(
            self.row as i8 + direction.d_row,
            self.col as i8 + direction.d_col,
        )
    }

    /// Iterates every square, row-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..(BOARD_SIZE as usize * BOARD_SIZE as usize)).map(Square::from_index)
    }

    /// Parses `a1`..`h8`. The file is the column; rank 1 is row 7.
    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let caps = ALGEBRAIC_SQUARE.captures(algebraic)?;
        let file = caps[1].chars().next()?.to_ascii_lowercase();
        let rank = caps[2].chars().next()?.to_digit(10)? as u8;
        let col = file as u8 - b'a';
        let row = BOARD_SIZE - rank;
        Some(Self::new(row, col))
    }

    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE - self.row;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
