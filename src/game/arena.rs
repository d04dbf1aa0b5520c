//! Self-play arena: a random BLACK player against a searching WHITE player,
//! over many independent games.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::board::player::Player;

use super::game::{Game, GameError, FIRST_TURN};

/// Arena configuration.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    pub games: usize,
    /// WHITE's search depth; 0 makes WHITE play randomly too.
    pub depth: u8,
    /// Games still running after this many turns are scored as draws.
    pub max_turns: u32,
    /// Seeds game `i` with `seed + i`, making a run reproducible.
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 10,
            depth: 2,
            max_turns: 500,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct ArenaResult {
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
}

impl ArenaResult {
    fn record(mut self, winner: Option<Player>) -> Self {
        match winner {
            Some(Player::Black) => self.black_wins += 1,
            Some(Player::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
        self
    }

    pub fn total(&self) -> usize {
        self.black_wins + self.white_wins + self.draws
    }
}

pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Plays every game, each on its own `Game`, in parallel.
    pub fn play(&self) -> Result<ArenaResult, GameError> {
        let winners = (0..self.config.games)
            .into_par_iter()
            .map(|index| self.play_game(index))
            .collect::<Result<Vec<_>, _>>()?;

        let result = winners
            .into_iter()
            .fold(ArenaResult::default(), ArenaResult::record);
        info!(
            "arena finished {} games at depth {}: black {}, white {}, draws {}",
            result.total(),
            self.config.depth,
            result.black_wins,
            result.white_wins,
            result.draws
        );
        Ok(result)
    }

    /// Plays game number `index` to the end. `None` means a draw by the turn
    /// limit.
    pub fn play_game(&self, index: usize) -> Result<Option<Player>, GameError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_entropy(),
        };
        let mut game = Game::new();

        while !game.is_game_over() {
            if game.turn() >= FIRST_TURN + self.config.max_turns {
                info!("game {} drawn after {} turns", index, self.config.max_turns);
                return Ok(None);
            }

            let player = game.current_player();
            let path = match player {
                Player::White if self.config.depth > 0 => {
                    game.search_move(player, self.config.depth)?
                }
                _ => game
                    .random_move_with(player, &mut rng)
                    .ok_or(GameError::NoAvailableMoves { player })?,
            };

            game.make_move(&path)?;
            game.advance_turn(false);
        }

        info!(
            "game {} won by {:?} on turn {}",
            index,
            game.winner(),
            game.turn()
        );
        Ok(game.winner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(games: usize, depth: u8, seed: u64) -> ArenaConfig {
        ArenaConfig {
            games,
            depth,
            max_turns: 200,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_every_game_is_tallied() {
        let result = Arena::new(config(4, 1, 7)).play().unwrap();
        assert_eq!(result.total(), 4);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let first = Arena::new(config(3, 1, 42)).play().unwrap();
        let second = Arena::new(config(3, 1, 42)).play().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_against_random() {
        let arena = Arena::new(config(2, 0, 3));
        for index in 0..2 {
            let winner = arena.play_game(index).unwrap();
            if let Some(player) = winner {
                assert!(Player::ALL.contains(&player));
            }
        }
    }

    #[test]
    fn test_turn_limit_scores_a_draw() {
        let arena = Arena::new(ArenaConfig {
            games: 1,
            depth: 0,
            max_turns: 0,
            seed: Some(1),
        });
        assert_eq!(arena.play_game(0).unwrap(), None);
        assert_eq!(
            arena.play().unwrap(),
            ArenaResult {
                black_wins: 0,
                white_wins: 0,
                draws: 1
            }
        );
    }

    #[test]
    fn test_default_config() {
        let config = ArenaConfig::default();
        assert_eq!(config.games, 10);
        assert_eq!(config.depth, 2);
        assert_eq!(config.max_turns, 500);
        assert_eq!(config.seed, None);
    }
}
