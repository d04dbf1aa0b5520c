use common::coordinates::Square;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, the square is already occupied")]
    SquareOccupiedBoardPutError { square: Square },
    #[error("Cannot capture on {square}, the square is empty")]
    EmptySquareCaptureError { square: Square },
    #[error("Cannot apply path, there is no piece on {square}")]
    FromSquareIsEmptyPathApplicationError { square: Square },
    #[error("Cannot apply path, the destination {square} is occupied")]
    ToSquareIsOccupiedPathApplicationError { square: Square },
}
