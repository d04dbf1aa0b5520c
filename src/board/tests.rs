use super::*;
use crate::checkers_position;
use crate::move_generator::path::{Path, Step};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

#[test]
fn test_starting_position_layout() {
    let board = Board::starting_position();
    assert_eq!(board.pieces().count(), 24);
    assert_eq!(board.count(Player::Black, Rank::Man), 12);
    assert_eq!(board.count(Player::White, Rank::Man), 12);

    for (square, piece) in board.pieces() {
        assert!(square.is_dark(), "{} is not a dark square", square);
        match piece.player {
            Player::White => assert!(square.row() < 3),
            Player::Black => assert!(square.row() > 4),
        }
    }

    let black: Vec<_> = board.player_squares(Player::Black).collect();
    assert_eq!(
        black,
        vec![
            sq(5, 0),
            sq(5, 2),
            sq(5, 4),
            sq(5, 6),
            sq(6, 1),
            sq(6, 3),
            sq(6, 5),
            sq(6, 7),
            sq(7, 0),
            sq(7, 2),
            sq(7, 4),
            sq(7, 6),
        ]
    );
}

#[test]
fn test_set_single_cell() {
    let mut board = Board::starting_position();
    let previous = board.set(sq(2, 0), Some(Piece::man(Player::Black)));
    assert_eq!(previous, None);
    assert_eq!(board.get(sq(2, 0)), Some(Piece::man(Player::Black)));
}

#[test]
fn test_put_on_occupied_square_fails() {
    let mut board = Board::starting_position();
    assert_eq!(
        board.put(sq(0, 1), Piece::man(Player::Black)),
        Err(BoardError::SquareOccupiedBoardPutError { square: sq(0, 1) })
    );
    assert_eq!(board.get(sq(0, 1)), Some(Piece::man(Player::White)));
}

#[test]
fn test_capture_and_restore() {
    let mut board = Board::starting_position();
    let before = board.clone();

    let captured = board.capture(sq(2, 1)).unwrap();
    assert_eq!(captured, Piece::man(Player::White));
    assert_eq!(board.get(sq(2, 1)), None);

    board.restore(sq(2, 1), captured);
    assert_eq!(board, before);
}

#[test]
fn test_capture_empty_square_fails() {
    let mut board = Board::starting_position();
    assert_eq!(
        board.capture(sq(3, 0)),
        Err(BoardError::EmptySquareCaptureError { square: sq(3, 0) })
    );
}

#[test]
fn test_apply_relocates_piece() {
    let mut board = Board::starting_position();
    let piece = Piece::man(Player::White);
    board.apply(piece, sq(2, 1), sq(3, 0));
    assert_eq!(board.get(sq(2, 1)), None);
    assert_eq!(board.get(sq(3, 0)), Some(piece));

    let piece = Piece::man(Player::Black);
    board.apply(piece, sq(5, 6), sq(4, 5));
    assert_eq!(board.get(sq(5, 6)), None);
    assert_eq!(board.get(sq(4, 5)), Some(piece));
}

#[test]
fn test_promotion_on_far_row() {
    let mut board = Board::new();
    let white = Piece::man(Player::White);
    let placed = board.apply(white, sq(6, 1), sq(7, 0));
    assert_eq!(placed, Piece::king(Player::White));

    let black = Piece::man(Player::Black);
    let placed = board.apply(black, sq(1, 2), sq(0, 1));
    assert_eq!(placed, Piece::king(Player::Black));

    // not the far row
    let placed = board.apply(white, sq(4, 1), sq(5, 2));
    assert_eq!(placed, white);
    let placed = board.apply(black, sq(3, 6), sq(2, 7));
    assert_eq!(placed, black);
}

#[test]
fn test_king_reaching_far_row_again_is_unchanged() {
    let mut board = Board::new();
    let king = Piece::king(Player::White);
    let placed = board.apply(king, sq(6, 1), sq(7, 0));
    assert_eq!(placed, king);
    let placed = board.apply(placed, sq(7, 0), sq(6, 1));
    assert_eq!(placed, king);
}

#[test]
fn test_make_and_unmake_capture_chain() {
    let mut board = checkers_position! {
        ........
        ........
        ...w....
        ........
        ...w....
        ..b.....
        ........
        ........
    };
    let before = board.clone();
    let path = Path::new(vec![
        Step::new(sq(5, 2), None),
        Step::new(sq(3, 4), Some(sq(4, 3))),
        Step::new(sq(1, 2), Some(sq(2, 3))),
    ]);

    let undo = board.make_path(&path).unwrap();
    assert_eq!(board.get(sq(1, 2)), Some(Piece::man(Player::Black)));
    assert!(!board.has_pieces(Player::White));
    assert_eq!(undo.captured().len(), 2);

    board.unmake_path(undo);
    assert_eq!(board, before);
}

#[test]
fn test_make_path_crowns_and_unmake_demotes() {
    let mut board = checkers_position! {
        ........
        ..w.....
        ...b....
        ........
        ........
        ........
        ........
        ........
    };
    let before = board.clone();
    let path = Path::new(vec![
        Step::new(sq(1, 2), None),
        Step::new(sq(3, 4), Some(sq(2, 3))),
    ]);
    // row 3 is not white's far row
    let undo = board.make_path(&path).unwrap();
    assert_eq!(board.get(sq(3, 4)), Some(Piece::man(Player::White)));
    board.unmake_path(undo);
    assert_eq!(board, before);

    let path = Path::new(vec![Step::new(sq(2, 3), None), Step::new(sq(1, 4), None)]);
    let undo = board.make_path(&path).unwrap();
    assert_eq!(board.get(sq(1, 4)), Some(Piece::man(Player::Black)));
    board.unmake_path(undo);

    let path = Path::new(vec![
        Step::new(sq(2, 3), None),
        Step::new(sq(0, 1), Some(sq(1, 2))),
    ]);
    let undo = board.make_path(&path).unwrap();
    assert_eq!(board.get(sq(0, 1)), Some(Piece::king(Player::Black)));
    board.unmake_path(undo);
    assert_eq!(board, before);
}

#[test]
fn test_make_path_failure_leaves_board_untouched() {
    let mut board = Board::starting_position();
    let before = board.clone();

    let from_empty = Path::new(vec![Step::new(sq(4, 1), None), Step::new(sq(3, 2), None)]);
    assert_eq!(
        board.make_path(&from_empty).unwrap_err(),
        BoardError::FromSquareIsEmptyPathApplicationError { square: sq(4, 1) }
    );
    assert_eq!(board, before);

    let onto_occupied = Path::new(vec![Step::new(sq(6, 1), None), Step::new(sq(5, 0), None)]);
    assert_eq!(
        board.make_path(&onto_occupied).unwrap_err(),
        BoardError::ToSquareIsOccupiedPathApplicationError { square: sq(5, 0) }
    );
    assert_eq!(board, before);

    let capture_nothing = Path::new(vec![
        Step::new(sq(5, 0), None),
        Step::new(sq(4, 1), None),
        Step::new(sq(3, 2), Some(sq(4, 5))),
    ]);
    assert_eq!(
        board.make_path(&capture_nothing).unwrap_err(),
        BoardError::EmptySquareCaptureError { square: sq(4, 5) }
    );
    assert_eq!(board, before);
}

#[test]
fn test_display_shows_every_row() {
    let board = Board::starting_position();
    let rendered = board.to_string();
    assert_eq!(rendered.lines().count(), 9);
    assert_eq!(rendered.matches('⛂').count(), 12);
    assert_eq!(rendered.matches('⛀').count(), 12);
}
