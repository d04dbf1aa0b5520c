//! Moves command - list the legal paths in a position.

use checkers::board::player::Player;
use checkers::game::Game;
use checkers::input_handler::position::STARTING_POSITION;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct MovesArgs {
    #[structopt(long = "position", default_value = STARTING_POSITION)]
    pub game: Game,
    #[structopt(
        long = "player",
        help = "Side to move instead of the one in the position (black, white or random)"
    )]
    pub player: Option<Player>,
}

impl Command for MovesArgs {
    fn execute(mut self) {
        if let Some(player) = self.player {
            self.game.set_current_player(player);
        }
        let player = self.game.current_player();
        let paths = self.game.legal_paths();
        if paths.is_empty() {
            println!("{} has no legal moves", player);
            return;
        }

        println!("{}", self.game.board());
        for path in paths.values().flatten() {
            println!("{}", path);
        }
    }
}
