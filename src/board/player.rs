use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

use common::coordinates::BOARD_SIZE;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Black = 0,
    White = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    pub fn opponent(&self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Row delta of a man's forward step. BLACK starts at the bottom and
    /// moves up the board; WHITE starts at the top and moves down.
    pub fn forward(&self) -> i8 {
        match self {
            Player::Black => -1,
            Player::White => 1,
        }
    }

    /// The row on which this player's men are crowned.
    pub fn far_row(&self) -> u8 {
        match self {
            Player::Black => 0,
            Player::White => BOARD_SIZE - 1,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Player::Black)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::Black => "black",
            Player::White => "white",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "black" => Ok(Player::Black),
            "white" => Ok(Player::White),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: black, white, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        for player in Player::ALL {
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_far_row_is_opposite_home() {
        assert_eq!(Player::Black.far_row(), 0);
        assert_eq!(Player::White.far_row(), 7);
        assert_eq!(Player::Black.forward(), -Player::White.forward());
    }

    #[test]
    fn test_random() {
        assert!(Player::ALL.contains(&Player::random()));
    }

    #[test]
    fn test_parse_white() {
        assert_eq!(Player::White, Player::from_str("white").unwrap());
    }

    #[test]
    fn test_parse_black() {
        assert_eq!(Player::Black, Player::from_str("black").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_player = Player::from_str("random").unwrap();
        assert!(Player::ALL.contains(&rand_player));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Player::from_str("red").is_err());
    }
}
