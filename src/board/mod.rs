pub mod error;
pub mod piece;
pub mod player;

mod display;

#[cfg(test)]
mod tests;

use common::coordinates::Square;
use error::BoardError;
use piece::{Piece, Rank};
use player::Player;

use crate::move_generator::path::Path;

/// Rows each side fills in the starting position.
const WHITE_HOME_ROWS: std::ops::Range<u8> = 0..3;
const BLACK_HOME_ROWS: std::ops::Range<u8> = 5..8;

/// The 64-cell grid. Each cell is either empty or holds exactly one piece.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

/// Everything needed to take back a path applied with `Board::make_path`.
#[derive(Clone, Debug)]
pub struct PathUndo {
    origin: Square,
    destination: Square,
    piece: Piece,
    captured: Vec<(Square, Piece)>,
}

impl PathUndo {
    pub fn captured(&self) -> &[(Square, Piece)] {
        &self.captured
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self { cells: [None; 64] }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::new();
        for square in Square::all().filter(|sq| sq.is_dark()) {
            if WHITE_HOME_ROWS.contains(&square.row()) {
                board.set(square, Some(Piece::man(Player::White)));
            } else if BLACK_HOME_ROWS.contains(&square.row()) {
                board.set(square, Some(Piece::man(Player::Black)));
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// Overwrites a single cell, returning what was there before.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[square.index()], piece)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.cells[square.index()].is_some()
    }

    #[must_use = "placing a piece may fail if the square is occupied"]
    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square });
        }
        self.set(square, Some(piece));
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|piece| (Square::from_index(i), piece)))
    }

    pub fn player_squares(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.player == player)
            .map(|(square, _)| square)
    }

    pub fn count(&self, player: Player, rank: Rank) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.player == player && piece.rank == rank)
            .count()
    }

    pub fn has_pieces(&self, player: Player) -> bool {
        self.player_squares(player).next().is_some()
    }

    /// Relocates `piece` from `from` to `to`, crowning it if `to` is on its
    /// far row. Legality is the caller's concern. Returns the piece as placed.
    pub fn apply(&mut self, piece: Piece, from: Square, to: Square) -> Piece {
        let placed = piece.promoted_on(to.row()).unwrap_or(piece);
        self.set(from, None);
        self.set(to, Some(placed));
        placed
    }

    /// Removes and returns the piece on `square`.
    pub fn capture(&mut self, square: Square) -> Result<Piece, BoardError> {
        self.remove(square)
            .ok_or(BoardError::EmptySquareCaptureError { square })
    }

    /// Puts back a piece lifted during speculative generation.
    pub(crate) fn restore(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    /// Applies a whole path: relocation, every capture along it, and
    /// promotion on arrival. The board is left untouched on error.
    pub fn make_path(&mut self, path: &Path) -> Result<PathUndo, BoardError> {
        let origin = path.origin();
        let piece = self
            .get(origin)
            .ok_or(BoardError::FromSquareIsEmptyPathApplicationError { square: origin })?;

        let mut undo = PathUndo {
            origin,
            destination: origin,
            piece,
            captured: Vec::new(),
        };
        let mut current = piece;

        for step in path.steps().iter().skip(1) {
            if self.is_occupied(step.square) {
                self.unmake_path(undo);
                return Err(BoardError::ToSquareIsOccupiedPathApplicationError {
                    square: step.square,
                });
            }
            current = self.apply(current, undo.destination, step.square);
            undo.destination = step.square;

            if let Some(captured_square) = step.captured {
                match self.capture(captured_square) {
                    Ok(captured) => undo.captured.push((captured_square, captured)),
                    Err(error) => {
                        self.unmake_path(undo);
                        return Err(error);
                    }
                }
            }
        }

        Ok(undo)
    }

    pub fn unmake_path(&mut self, undo: PathUndo) {
        self.set(undo.destination, None);
        self.set(undo.origin, Some(undo.piece));
        for (square, piece) in undo.captured.into_iter().rev() {
            self.restore(square, piece);
        }
    }
}
