//! Best move command - search for the best path from a position.

use checkers::board::player::Player;
use checkers::game::Game;
use checkers::input_handler::position::STARTING_POSITION;
use checkers::searcher::{AlphaBetaSearcher, SearchError};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long = "position", default_value = STARTING_POSITION)]
    pub game: Game,
    #[structopt(
        long = "player",
        help = "Side to move instead of the one in the position (black, white or random)"
    )]
    pub player: Option<Player>,
}

impl Command for BestMoveArgs {
    fn execute(mut self) {
        if let Some(player) = self.player {
            self.game.set_current_player(player);
        }
        let mut searcher = AlphaBetaSearcher::new(self.depth);

        match searcher.search(&mut self.game) {
            Ok((path, score)) => println!("{} (score: {})", path, score),
            Err(SearchError::NoAvailableMoves) => {
                eprintln!("There are no valid moves in the given position.")
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
