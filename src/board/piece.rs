use common::coordinates::Direction;
use smallvec::{smallvec, SmallVec};

use super::player::Player;

/// Directions a piece may step or jump in. Never more than four.
pub type DirectionList = SmallVec<[Direction; 4]>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Rank {
    Man,
    King,
}

pub const ALL_RANKS: [Rank; 2] = [Rank::Man, Rank::King];

impl Rank {
    pub fn material_value(&self) -> i32 {
        match self {
            Rank::Man => 1,
            Rank::King => 2,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub player: Player,
    pub rank: Rank,
}

impl Piece {
    pub const fn new(player: Player, rank: Rank) -> Self {
        Self { player, rank }
    }

    pub const fn man(player: Player) -> Self {
        Self::new(player, Rank::Man)
    }

    pub const fn king(player: Player) -> Self {
        Self::new(player, Rank::King)
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    pub fn material_value(&self) -> i32 {
        self.rank.material_value()
    }

    /// Men step toward the owner's far row only; kings use all four diagonals.
    pub fn directions(&self) -> DirectionList {
        match self.rank {
            Rank::Man => {
                let forward = self.player.forward();
                smallvec![Direction::new(forward, -1), Direction::new(forward, 1)]
            }
            Rank::King => SmallVec::from_slice(&Direction::ALL),
        }
    }

    /// Returns the crowned piece if `row` is this man's far row.
    pub fn promoted_on(&self, row: u8) -> Option<Piece> {
        match self.rank {
            Rank::Man if row == self.player.far_row() => Some(Piece::king(self.player)),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match (self.player, self.rank) {
            (Player::Black, Rank::Man) => '⛀',
            (Player::Black, Rank::King) => '⛁',
            (Player::White, Rank::Man) => '⛂',
            (Player::White, Rank::King) => '⛃',
        }
    }

    pub fn to_char(&self) -> char {
        match (self.player, self.rank) {
            (Player::Black, Rank::Man) => 'b',
            (Player::Black, Rank::King) => 'B',
            (Player::White, Rank::Man) => 'w',
            (Player::White, Rank::King) => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'b' => Some(Piece::man(Player::Black)),
            'B' => Some(Piece::king(Player::Black)),
            'w' => Some(Piece::man(Player::White)),
            'W' => Some(Piece::king(Player::White)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_outranks_man() {
        assert!(Rank::King.material_value() > Rank::Man.material_value());
    }

    #[test]
    fn test_man_directions_point_forward() {
        let black = Piece::man(Player::Black).directions();
        assert_eq!(black.len(), 2);
        assert!(black.iter().all(|d| d.d_row == -1));

        let white = Piece::man(Player::White).directions();
        assert_eq!(white.len(), 2);
        assert!(white.iter().all(|d| d.d_row == 1));
    }

    #[test]
    fn test_king_directions() {
        for player in Player::ALL {
            assert_eq!(Piece::king(player).directions().as_slice(), &Direction::ALL);
        }
    }

    #[test]
    fn test_promoted_on() {
        let white = Piece::man(Player::White);
        assert_eq!(white.promoted_on(7), Some(Piece::king(Player::White)));
        assert_eq!(white.promoted_on(5), None);

        let black = Piece::man(Player::Black);
        assert_eq!(black.promoted_on(0), Some(Piece::king(Player::Black)));
        assert_eq!(black.promoted_on(2), None);

        assert_eq!(Piece::king(Player::Black).promoted_on(0), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Piece::man(Player::Black).symbol(), '⛀');
        assert_eq!(Piece::king(Player::Black).symbol(), '⛁');
        assert_eq!(Piece::man(Player::White).symbol(), '⛂');
        assert_eq!(Piece::king(Player::White).symbol(), '⛃');
    }

    #[test]
    fn test_char_round_trip() {
        for c in ['b', 'B', 'w', 'W'] {
            assert_eq!(Piece::from_char(c).map(|p| p.to_char()), Some(c));
        }
        assert_eq!(Piece::from_char('x'), None);
    }
}
