//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    arena::ArenaArgs, best_move::BestMoveArgs, count_positions::CountPositionsArgs,
    moves::MovesArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "checkers",
    about = "A checkers engine with alpha-beta search, implemented in Rust ⛂"
)]
pub enum Checkers {
    #[structopt(
        name = "arena",
        about = "Play `--games` games (default: 10) of a random BLACK player against WHITE searching at `--depth` (default: 2; 0 plays randomly). Games still running after `--max-turns` turns (default: 500) count as draws. Pass `--seed` for a reproducible run."
    )]
    Arena(ArenaArgs),
    #[structopt(
        name = "best-move",
        about = "Search for the best path for the side to move in a position given with `--position` (default: starting position), at `--depth` (default: 4). Prints the path and its material score."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "moves",
        about = "List every legal path for the side to move in a position given with `--position` (default: starting position)."
    )]
    Moves(MovesArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4), printing the board after every turn."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the legal paths reachable from the starting position for every depth up to `--depth` (default: 4), and report the time it took to do so."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Checkers {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Arena(cmd),
            BestMove(cmd),
            Moves(cmd),
            Watch(cmd),
            CountPositions(cmd),
        }
    }
}
