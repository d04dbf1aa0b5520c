mod direction;
mod square;

pub use direction::Direction;
pub use square::Square;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 8;
