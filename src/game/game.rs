use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use common::coordinates::Square;
use log::{debug, info};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::player::Player;
use crate::board::{Board, PathUndo};
use crate::evaluate::{self, GameEnding};
use crate::input_handler::position::{parse_position, to_position, PositionParseError};
use crate::move_generator::path::Path;
use crate::move_generator::PathMap;
use crate::searcher::{AlphaBetaSearcher, SearchError};

/// The turn counter's value before the first move.
pub const FIRST_TURN: u32 = 1;

/// Represents the state and control of a checkers game.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    turn: u32,
    winner: Option<Player>,
    pending_chain: Option<PendingChain>,
}

/// A capture chain entered through `move_piece` that has further jumps to
/// make. `progress` indexes the step the piece currently stands on.
#[derive(Clone, Debug)]
struct PendingChain {
    paths: Vec<Path>,
    progress: usize,
}

impl PendingChain {
    fn square(&self) -> Square {
        self.paths[0].steps()[self.progress].square
    }
}

/// What a single step made with `Game::move_piece` did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StepOutcome {
    pub from: Square,
    pub to: Square,
    pub captured: Option<(Square, Piece)>,
    pub promoted: bool,
    /// The same piece must jump again before the turn ends.
    pub chain_continues: bool,
}

/// Undo record for a whole turn played during search.
#[derive(Clone, Debug)]
pub(crate) struct GameUndo {
    board: PathUndo,
    player: Player,
    turn: u32,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("that is not a legal path: {path}")]
    IllegalPath { path: Path },
    #[error("cannot move from {from} to {to}")]
    IllegalStep { from: Square, to: Square },
    #[error("the piece on {square} does not belong to the player to move")]
    NotYourPiece { square: Square },
    #[error("a capture chain must continue from {square}")]
    ChainInProgress { square: Square },
    #[error("{player} has no available moves")]
    NoAvailableMoves { player: Player },
    #[error("board error: {error:?}")]
    BoardError { error: BoardError },
    #[error("search error: {error:?}")]
    SearchError { error: SearchError },
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the starting position. BLACK moves first.
    pub fn new() -> Self {
        Self::from_board(Board::starting_position(), Player::Black)
    }

    pub fn from_board(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            turn: FIRST_TURN,
            winner: None,
            pending_chain: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn set_winner(&mut self, player: Player) {
        self.winner = Some(player);
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Players that still have pieces on the board.
    pub fn players(&self) -> BTreeSet<Player> {
        self.board.pieces().map(|(_, piece)| piece.player).collect()
    }

    /// Hands the move to the opponent unless the current piece is still
    /// jumping. The turn counter moves on either way.
    pub fn advance_turn(&mut self, continuing_capture: bool) {
        if !continuing_capture {
            self.current_player = self.current_player.opponent();
            self.pending_chain = None;
        }
        self.turn += 1;
        debug!("turn {}: {} to move", self.turn, self.current_player);
    }

    /// Why the game is over, if it is. Does not record a winner.
    pub fn game_ending(&mut self) -> Option<GameEnding> {
        evaluate::game_ending(&mut self.board)
    }

    /// Ends the game once either player has no pieces or no legal move,
    /// recording the opponent as winner the first time it is detected.
    pub fn is_game_over(&mut self) -> bool {
        match self.game_ending() {
            Some(ending) => {
                if self.winner.is_none() {
                    info!("game over on turn {}: {}", self.turn, ending);
                    self.winner = Some(ending.winner());
                }
                true
            }
            None => false,
        }
    }

    /// Legal paths for the player to move, keyed by origin.
    pub fn legal_paths(&mut self) -> PathMap {
        self.board.legal_paths(self.current_player)
    }

    /// Next-step destinations from `from`, each with the square it jumps.
    /// Empty if `from` may not move now.
    pub fn destinations(&mut self, from: Square) -> BTreeMap<Square, Option<Square>> {
        let (paths, progress) = match &self.pending_chain {
            Some(chain) if chain.square() == from => (chain.paths.clone(), chain.progress),
            Some(_) => return BTreeMap::new(),
            None => match self.legal_paths().remove(&from) {
                Some(paths) => (paths, 0),
                None => return BTreeMap::new(),
            },
        };

        paths
            .iter()
            .filter_map(|path| path.step(progress + 1))
            .map(|step| (step.square, step.captured))
            .collect()
    }

    /// Applies a complete legal path for the player to move. Rejected paths
    /// leave the board untouched. The caller advances the turn.
    pub fn make_move(&mut self, path: &Path) -> Result<(), GameError> {
        if let Some(chain) = &self.pending_chain {
            return Err(GameError::ChainInProgress {
                square: chain.square(),
            });
        }

        let is_legal = self
            .legal_paths()
            .get(&path.origin())
            .map_or(false, |paths| paths.contains(path));
        if !is_legal {
            return Err(GameError::IllegalPath { path: path.clone() });
        }

        self.board
            .make_path(path)
            .map_err(|error| GameError::BoardError { error })?;
        debug!("{} played {}", self.current_player, path);
        Ok(())
    }

    /// Moves one step along a legal path, capturing the jumped piece if any.
    /// While a chain continues only steps from the jumping piece are
    /// accepted. Rejected steps leave the board untouched.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<StepOutcome, GameError> {
        let (candidates, progress) = match &self.pending_chain {
            Some(chain) if chain.square() == from => (chain.paths.clone(), chain.progress),
            Some(chain) => {
                return Err(GameError::ChainInProgress {
                    square: chain.square(),
                })
            }
            None => {
                let piece = self
                    .board
                    .get(from)
                    .ok_or(GameError::IllegalStep { from, to })?;
                if piece.player != self.current_player {
                    return Err(GameError::NotYourPiece { square: from });
                }
                let paths = self
                    .legal_paths()
                    .remove(&from)
                    .ok_or(GameError::IllegalStep { from, to })?;
                (paths, 0)
            }
        };

        let next = progress + 1;
        let remaining: Vec<Path> = candidates
            .into_iter()
            .filter(|path| path.step(next).map(|step| step.square) == Some(to))
            .collect();
        let step = match remaining.first().and_then(|path| path.step(next)) {
            Some(step) => *step,
            None => return Err(GameError::IllegalStep { from, to }),
        };
        let piece = self
            .board
            .get(from)
            .ok_or(GameError::IllegalStep { from, to })?;

        let captured = match step.captured {
            Some(square) => {
                let captured = self
                    .board
                    .capture(square)
                    .map_err(|error| GameError::BoardError { error })?;
                Some((square, captured))
            }
            None => None,
        };
        let placed = self.board.apply(piece, from, to);

        let continuing: Vec<Path> = remaining
            .into_iter()
            .filter(|path| path.len() > next + 1)
            .collect();
        let chain_continues = !continuing.is_empty();
        self.pending_chain = chain_continues.then(|| PendingChain {
            paths: continuing,
            progress: next,
        });

        debug!("{} moved {} to {}", self.current_player, from, to);
        Ok(StepOutcome {
            from,
            to,
            captured,
            promoted: placed != piece,
            chain_continues,
        })
    }

    /// A uniformly random legal origin, then a random path from it.
    pub fn random_move(&mut self, player: Player) -> Option<Path> {
        self.random_move_with(player, &mut rand::thread_rng())
    }

    pub fn random_move_with<R: Rng + ?Sized>(&mut self, player: Player, rng: &mut R) -> Option<Path> {
        let paths = self.board.legal_paths(player);
        let (_, piece_paths) = paths.into_iter().choose(&mut *rng)?;
        piece_paths.choose(rng).cloned()
    }

    /// The best path for `player` found by alpha-beta search to `depth`.
    pub fn search_move(&mut self, player: Player, depth: u8) -> Result<Path, GameError> {
        let to_move = self.current_player;
        self.current_player = player;
        let result = AlphaBetaSearcher::new(depth).search(self);
        self.current_player = to_move;

        match result {
            Ok((path, _)) => Ok(path),
            Err(SearchError::NoAvailableMoves) => Err(GameError::NoAvailableMoves { player }),
            Err(error) => Err(GameError::SearchError { error }),
        }
    }

    /// Plays a generated path and hands the move over, without checking it.
    pub(crate) fn play_unchecked(&mut self, path: &Path) -> Result<GameUndo, BoardError> {
        let board = self.board.make_path(path)?;
        let undo = GameUndo {
            board,
            player: self.current_player,
            turn: self.turn,
        };
        self.current_player = self.current_player.opponent();
        self.turn += 1;
        Ok(undo)
    }

    pub(crate) fn take_back(&mut self, undo: GameUndo) {
        self.board.unmake_path(undo.board);
        self.current_player = undo.player;
        self.turn = undo.turn;
    }

    /// Serializes the board and the player to move.
    pub fn to_position(&self) -> String {
        to_position(&self.board, Some(self.current_player))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "turn {}, {} to move", self.turn, self.current_player)
    }
}

impl FromStr for Game {
    type Err = PositionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (board, player) = parse_position(input)?;
        Ok(Self::from_board(board, player.unwrap_or(Player::Black)))
    }
}
