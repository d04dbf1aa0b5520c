use std::fmt;

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::piece::ALL_RANKS;
use crate::board::player::Player;
use crate::board::Board;

/// Why a game ended. Each variant names the player who lost.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEnding {
    /// The player has no pieces left.
    NoPieces(Player),
    /// The player has pieces, but none of them can move.
    NoMoves(Player),
}

impl GameEnding {
    pub fn loser(&self) -> Player {
        match self {
            GameEnding::NoPieces(player) | GameEnding::NoMoves(player) => *player,
        }
    }

    pub fn winner(&self) -> Player {
        self.loser().opponent()
    }
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnding::NoPieces(player) => write!(f, "{} ran out of pieces", player),
            GameEnding::NoMoves(player) => write!(f, "{} ran out of moves", player),
        }
    }
}

/// Returns the game ending if either player is out of pieces or moves.
/// BLACK is examined before WHITE.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn game_ending(board: &mut Board) -> Option<GameEnding> {
    for player in Player::ALL {
        if !board.has_pieces(player) {
            return Some(GameEnding::NoPieces(player));
        }
        if board.moves_for(player).is_empty() {
            return Some(GameEnding::NoMoves(player));
        }
    }
    None
}

/// Material balance from `max_player`'s point of view: their material minus
/// the opponent's. Zero-sum by construction.
#[inline(always)]
pub fn score(board: &Board, max_player: Player) -> i32 {
    player_material_score(board, max_player) - player_material_score(board, max_player.opponent())
}

#[inline(always)]
pub fn player_material_score(board: &Board, player: Player) -> i32 {
    ALL_RANKS
        .iter()
        .map(|&rank| board.count(player, rank) as i32 * rank.material_value())
        .sum()
}
