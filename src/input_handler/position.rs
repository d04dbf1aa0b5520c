//! Text notation for checkers positions.
//!
//! Eight rows separated by `/`, row 0 (WHITE's home side) first. Within a
//! row `b`/`B` are a black man/king, `w`/`W` a white man/king, and empty
//! cells are written as `.` or as a digit run. An optional trailing field
//! names the side to move (`b` or `w`).

use std::str::FromStr;

use common::coordinates::{Square, BOARD_SIZE};
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::player::Player;
use crate::board::Board;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("Wrong number of fields: {field_count:?}")]
    WrongNumberOfFields { field_count: usize },
    #[error("Wrong number of rows: 8 expected, {row_count:?} given")]
    InvalidRowCount { row_count: usize },
    #[error("Row too long: {invalid_row:?}")]
    InvalidRowLength { invalid_row: String },
    #[error("Row incomplete: {incomplete_row:?}")]
    IncompleteRow { incomplete_row: String },
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Invalid side to move: {invalid_side:?}")]
    InvalidSide { invalid_side: String },
    #[error("Error placing piece: {board_error:?}")]
    ErrorPlacingPiece { board_error: BoardError },
}

type PositionResult<T> = Result<T, PositionParseError>;

pub const STARTING_POSITION: &str =
    "1w1w1w1w/w1w1w1w1/1w1w1w1w/8/8/b1b1b1b1/1b1b1b1b/b1b1b1b1 b";

/// Parses a position into a board and, if given, the side to move.
pub fn parse_position(input: &str) -> PositionResult<(Board, Option<Player>)> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    let (placement, side) = match fields.as_slice() {
        [placement] => (*placement, None),
        [placement, side] => (*placement, Some(parse_side(side)?)),
        _ => {
            return Err(PositionParseError::WrongNumberOfFields {
                field_count: fields.len(),
            })
        }
    };

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(PositionParseError::InvalidRowCount {
            row_count: rows.len(),
        });
    }

    let mut board = Board::new();
    for (row_index, row) in rows.iter().enumerate() {
        parse_row(&mut board, row, row_index as u8)?;
    }

    Ok((board, side))
}

fn parse_side(side: &str) -> PositionResult<Player> {
    match side {
        "b" => Ok(Player::Black),
        "w" => Ok(Player::White),
        _ => Err(PositionParseError::InvalidSide {
            invalid_side: side.to_string(),
        }),
    }
}

fn parse_row(board: &mut Board, row: &str, row_index: u8) -> PositionResult<()> {
    let mut col = 0u8;

    for c in row.chars() {
        if col >= BOARD_SIZE {
            return Err(PositionParseError::InvalidRowLength {
                invalid_row: row.to_string(),
            });
        }

        if c == '.' {
            col += 1;
        } else if let Some(empty_cells) = c.to_digit(10) {
            col += empty_cells as u8;
        } else {
            let piece = Piece::from_char(c).ok_or(PositionParseError::InvalidPieceCharacter {
                invalid_character: c,
            })?;
            board
                .put(Square::new(row_index, col), piece)
                .map_err(|board_error| PositionParseError::ErrorPlacingPiece { board_error })?;
            col += 1;
        }
    }

    match col {
        c if c > BOARD_SIZE => Err(PositionParseError::InvalidRowLength {
            invalid_row: row.to_string(),
        }),
        c if c < BOARD_SIZE => Err(PositionParseError::IncompleteRow {
            incomplete_row: row.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Serializes a board, using digit runs for empty cells.
pub fn to_position(board: &Board, side: Option<Player>) -> String {
    let mut position = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_count = 0;
        for col in 0..BOARD_SIZE {
            match board.get(Square::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        position.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    position.push(piece.to_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            position.push_str(&empty_count.to_string());
        }
        if row + 1 < BOARD_SIZE {
            position.push('/');
        }
    }

    if let Some(player) = side {
        position.push(' ');
        position.push(match player {
            Player::Black => 'b',
            Player::White => 'w',
        });
    }

    position
}

impl FromStr for Board {
    type Err = PositionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_position(input).map(|(board, _)| board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers_position;

    #[test]
    fn test_parse_starting_position() {
        let (board, side) = parse_position(STARTING_POSITION).unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(side, Some(Player::Black));
    }

    #[test]
    fn test_serialize_starting_position() {
        assert_eq!(
            to_position(&Board::starting_position(), Some(Player::Black)),
            STARTING_POSITION
        );
    }

    #[test]
    fn test_dots_and_digits_are_interchangeable() {
        let dotted: Board = "8/8/...w..../..b...../8/8/8/8".parse().unwrap();
        let digits: Board = "8/8/3w4/2b5/8/8/8/8".parse().unwrap();
        let expected = checkers_position! {
            ........
            ........
            ...w....
            ..b.....
            ........
            ........
            ........
            ........
        };
        assert_eq!(dotted, expected);
        assert_eq!(digits, expected);
        assert_eq!(to_position(&expected, None), "8/8/3w4/2b5/8/8/8/8");
    }

    #[test]
    fn test_kings_and_side() {
        let (board, side) = parse_position("W7/8/8/8/8/8/8/7B w").unwrap();
        assert_eq!(board.get(Square::new(0, 0)), Some(Piece::king(Player::White)));
        assert_eq!(board.get(Square::new(7, 7)), Some(Piece::king(Player::Black)));
        assert_eq!(side, Some(Player::White));
    }

    #[test]
    fn test_invalid_positions() {
        assert_eq!(
            parse_position("8/8/8/8/8/8/8"),
            Err(PositionParseError::InvalidRowCount { row_count: 7 })
        );
        assert_eq!(
            parse_position("8/8/8/8/8/8/8/7"),
            Err(PositionParseError::IncompleteRow {
                incomplete_row: "7".to_string()
            })
        );
        assert_eq!(
            parse_position("8/8/8/8/8/8/8/9"),
            Err(PositionParseError::InvalidRowLength {
                invalid_row: "9".to_string()
            })
        );
        assert_eq!(
            parse_position("8/8/8/8/8/8/8/bbbbbbbbb"),
            Err(PositionParseError::InvalidRowLength {
                invalid_row: "bbbbbbbbb".to_string()
            })
        );
        assert_eq!(
            parse_position("8/8/8/8/8/8/8/7x"),
            Err(PositionParseError::InvalidPieceCharacter {
                invalid_character: 'x'
            })
        );
        assert_eq!(
            parse_position("8/8/8/8/8/8/8/8 x"),
            Err(PositionParseError::InvalidSide {
                invalid_side: "x".to_string()
            })
        );
        assert_eq!(
            parse_position("8/8/8/8/8/8/8/8 b extra"),
            Err(PositionParseError::WrongNumberOfFields { field_count: 3 })
        );
    }
}
