//! Minimax search with alpha-beta pruning over complete paths.
//!
//! Every origin contributes only its first generated path to the search.
//! Positions are explored with make/unmake on a single `Game`, so the game
//! handed in is restored before any search function returns.

use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::error::BoardError;
use crate::board::player::Player;
use crate::evaluate;
use crate::game::Game;
use crate::move_generator::path::Path;


/// Stand-ins for -∞ and +∞; no material score comes near either.
pub const NEG_INFINITY: i32 = i32::MIN;
pub const POS_INFINITY: i32 = i32::MAX;

/// The path chosen at the root (none at a terminal node) and its score.
pub type SearchResult = (Option<Path>, i32);

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("board error: {error:?}")]
    BoardError { error: BoardError },
}

/// Searches with alpha-beta pruning from the full (-∞, +∞) window.
pub fn alpha_beta(
    game: &mut Game,
    depth: u8,
    maximizing: bool,
    max_player: Player,
) -> Result<SearchResult, SearchError> {
    AlphaBetaSearcher::new(depth).alpha_beta(
        game,
        depth,
        maximizing,
        max_player,
        NEG_INFINITY,
        POS_INFINITY,
    )
}

/// Plain minimax over the same enumeration as `alpha_beta`, without pruning.
pub fn minimax(
    game: &mut Game,
    depth: u8,
    maximizing: bool,
    max_player: Player,
) -> Result<SearchResult, SearchError> {
    AlphaBetaSearcher::new(depth).minimax_inner(
        game,
        depth,
        maximizing,
        max_player,
        NEG_INFINITY,
        POS_INFINITY,
        false,
    )
}

pub struct AlphaBetaSearcher {
    search_depth: u8,
    searched_position_count: usize,
    termination_count: usize,
    last_score: Option<i32>,
    last_search_duration: Option<Duration>,
}

impl AlphaBetaSearcher {
    pub fn new(depth: u8) -> Self {
        Self {
            search_depth: depth,
            searched_position_count: 0,
            termination_count: 0,
            last_score: None,
            last_search_duration: None,
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_search_duration
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
        self.last_score = None;
        self.last_search_duration = None;
    }

    /// Finds the best path for the player to move, maximizing for them.
    pub fn search(&mut self, game: &mut Game) -> Result<(Path, i32), SearchError> {
        if self.search_depth == 0 {
            return Err(SearchError::DepthTooLow);
        }
        self.reset_stats();

        let started = Instant::now();
        let max_player = game.current_player();
        let (best_path, score) = self.alpha_beta(
            game,
            self.search_depth,
            true,
            max_player,
            NEG_INFINITY,
            POS_INFINITY,
        )?;
        self.last_search_duration = Some(started.elapsed());

        let best_path = best_path.ok_or(SearchError::NoAvailableMoves)?;
        self.last_score = Some(score);
        debug!(
            "best path for {}: {} (score {}, {} positions, {} cutoffs)",
            max_player, best_path, score, self.searched_position_count, self.termination_count
        );
        Ok((best_path, score))
    }

    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn alpha_beta(
        &mut self,
        game: &mut Game,
        depth: u8,
        maximizing: bool,
        max_player: Player,
        alpha: i32,
        beta: i32,
    ) -> Result<SearchResult, SearchError> {
        self.minimax_inner(game, depth, maximizing, max_player, alpha, beta, true)
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax_inner(
        &mut self,
        game: &mut Game,
        depth: u8,
        maximizing: bool,
        max_player: Player,
        mut alpha: i32,
        mut beta: i32,
        prune: bool,
    ) -> Result<SearchResult, SearchError> {
        self.searched_position_count += 1;

        if depth == 0 || game.game_ending().is_some() {
            return Ok((None, evaluate::score(game.board(), max_player)));
        }

        let candidates: Vec<Path> = game
            .legal_paths()
            .into_values()
            .filter_map(|paths| paths.into_iter().next())
            .collect();

        let mut best_path = None;
        let mut best_score = if maximizing { NEG_INFINITY } else { POS_INFINITY };

        for path in candidates {
            let undo = game
                .play_unchecked(&path)
                .map_err(|error| SearchError::BoardError { error })?;
            let result = self.minimax_inner(
                game,
                depth - 1,
                !maximizing,
                max_player,
                alpha,
                beta,
                prune,
            );
            game.take_back(undo);
            let (_, score) = result?;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_path = Some(path);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_path = Some(path);
                }
                beta = beta.min(score);
            }

            if prune && alpha >= beta {
                self.termination_count += 1;
                break;
            }
        }

        if best_path.is_none() {
            return Ok((None, evaluate::score(game.board(), max_player)));
        }

        Ok((best_path, best_score))
    }
}
