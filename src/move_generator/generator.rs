//! Move tree generation on the board.
//!
//! Jumps are explored speculatively on the live board: the jumping piece is
//! relocated and the jumped piece lifted for the duration of the recursive
//! call, then both are put back. `SpeculativeJump` owns that window, so the
//! board is restored on every exit path.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Deref, DerefMut};

use common::coordinates::{Direction, Square};
use log::debug;
use rayon::prelude::*;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::error::BoardError;
use crate::board::piece::{DirectionList, Piece, Rank};
use crate::board::player::Player;
use crate::board::Board;

use super::node::{MoveTree, NodeId};
use super::path::Path;

/// Minimum number of paths required to justify parallelization overhead
/// when counting positions.
const PARALLEL_MOVE_THRESHOLD: usize = 6;

/// Per-origin path lists, row-major by origin.
pub type PathMap = BTreeMap<Square, Vec<Path>>;

/// A jump in progress. While alive, the jumping piece sits on `to` and the
/// jumped piece is off the board; dropping it reverses both. No promotion
/// happens here, so the board comes back bit-identical.
struct SpeculativeJump<'a> {
    board: &'a mut Board,
    from: Square,
    over: Square,
    to: Square,
    jumped: Option<Piece>,
}

impl<'a> SpeculativeJump<'a> {
    fn new(board: &'a mut Board, from: Square, over: Square, to: Square) -> Self {
        let piece = board.remove(from);
        board.set(to, piece);
        let jumped = board.remove(over);
        Self {
            board,
            from,
            over,
            to,
            jumped,
        }
    }
}

impl Deref for SpeculativeJump<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for SpeculativeJump<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for SpeculativeJump<'_> {
    fn drop(&mut self) {
        let piece = self.board.remove(self.to);
        self.board.set(self.from, piece);
        if let Some(jumped) = self.jumped.take() {
            self.board.restore(self.over, jumped);
        }
    }
}

/// Directions a piece may keep jumping in after jumping along `taken`.
/// Kings may not immediately reverse; men keep their forward pair.
fn continuation_directions(piece: Piece, taken: Direction) -> DirectionList {
    match piece.rank {
        Rank::Man => piece.directions(),
        Rank::King => Direction::ALL
            .iter()
            .copied()
            .filter(|&direction| direction != taken.reverse())
            .collect(),
    }
}

impl Board {
    /// Builds the tree of every continuation for the piece on `origin`. An
    /// empty square yields a bare root.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn build_tree(&mut self, origin: Square) -> MoveTree {
        let mut tree = MoveTree::new(origin);
        if let Some(piece) = self.get(origin) {
            let directions = piece.directions();
            self.expand(&mut tree, MoveTree::ROOT, piece, origin, &directions, false);
        }
        tree
    }

    fn expand(
        &mut self,
        tree: &mut MoveTree,
        node: NodeId,
        piece: Piece,
        position: Square,
        directions: &[Direction],
        continuation: bool,
    ) {
        for &direction in directions {
            let adjacent = match position.offset(direction) {
                Some(square) => square,
                None => continue,
            };

            match self.get(adjacent) {
                None => {
                    // quiet steps only open a turn, they never follow a jump
                    if !continuation {
                        tree.add_child(node, adjacent, None);
                    }
                }
                Some(occupant) if occupant.player != piece.player => {
                    let landing = match adjacent.offset(direction) {
                        Some(square) if !self.is_occupied(square) => square,
                        _ => continue,
                    };

                    let child = tree.add_child(node, landing, Some(adjacent));
                    let next_directions = continuation_directions(piece, direction);
                    let mut jump = SpeculativeJump::new(self, position, adjacent, landing);
                    jump.expand(tree, child, piece, landing, &next_directions, true);
                }
                Some(_) => {}
            }
        }
    }

    /// Every path for every piece of `player` that can move at all, before
    /// the mandatory-capture rule is applied across pieces.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn paths_for(&mut self, player: Player) -> PathMap {
        let origins: Vec<Square> = self.player_squares(player).collect();
        origins
            .into_iter()
            .filter_map(|origin| {
                let tree = self.build_tree(origin);
                (!tree.root().is_leaf()).then(|| (origin, tree.to_paths()))
            })
            .collect()
    }

    /// `paths_for`, restricted to the pieces that may legally move this
    /// turn: if any piece can capture, only capturing pieces may move.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn legal_paths(&mut self, player: Player) -> PathMap {
        let mut paths = self.paths_for(player);
        let must_capture = paths
            .values()
            .any(|piece_paths| piece_paths.iter().any(Path::has_capture));

        if must_capture {
            paths.retain(|_, piece_paths| piece_paths.iter().any(Path::has_capture));
        }

        debug!(
            "{} has {} movable pieces (capture forced: {})",
            player,
            paths.len(),
            must_capture
        );
        paths
    }

    /// Squares `player` may move a piece from this turn.
    pub fn moves_for(&mut self, player: Player) -> BTreeSet<Square> {
        self.legal_paths(player).into_keys().collect()
    }

    /// Counts legal paths at every ply down to `depth`, players alternating
    /// after each complete path.
    pub fn count_positions(&mut self, depth: u8, player: Player) -> Result<usize, BoardError> {
        count_positions_inner(depth, self, player, 2)
    }
}

fn count_positions_inner(
    depth: u8,
    board: &mut Board,
    player: Player,
    parallel_threshold: u8,
) -> Result<usize, BoardError> {
    let candidates: Vec<Path> = board.legal_paths(player).into_values().flatten().collect();
    let mut count = candidates.len();

    if depth == 0 {
        return Ok(count);
    }

    let next_player = player.opponent();

    // Parallelize if depth is above threshold and we have enough moves to justify overhead
    if depth >= parallel_threshold && candidates.len() >= PARALLEL_MOVE_THRESHOLD {
        let inner_counts = candidates.par_iter().map(|path| {
            let mut local_board = board.clone();
            local_board.make_path(path)?;
            count_positions_inner(depth - 1, &mut local_board, next_player, parallel_threshold)
        });
        count += inner_counts.sum::<Result<usize, BoardError>>()?;
    } else {
        for path in candidates.iter() {
            let undo = board.make_path(path)?;
            let inner = count_positions_inner(depth - 1, board, next_player, parallel_threshold);
            board.unmake_path(undo);
            count += inner?;
        }
    }

    Ok(count)
}
