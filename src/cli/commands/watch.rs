//! Watch command - watch the computer play against itself.

use std::time::Duration;

use checkers::game::Game;
use checkers::input_handler::position::STARTING_POSITION;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long = "position", default_value = STARTING_POSITION)]
    pub game: Game,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long = "max-turns", default_value = "500")]
    pub max_turns: u32,
}

impl Command for WatchArgs {
    fn execute(mut self) {
        let last_turn = self.game.turn() + self.max_turns;

        println!("{}", self.game);
        while !self.game.is_game_over() {
            if self.game.turn() >= last_turn {
                println!("draw after {} turns", self.max_turns);
                return;
            }

            let player = self.game.current_player();
            let path = match self.game.search_move(player, self.depth) {
                Ok(path) => path,
                Err(err) => {
                    eprintln!("Failed to find a move: {}", err);
                    std::process::exit(1);
                }
            };
            if let Err(err) = self.game.make_move(&path) {
                eprintln!("Failed to play {}: {}", path, err);
                std::process::exit(1);
            }
            self.game.advance_turn(false);

            println!("\n{} played {}", player, path);
            println!("{}", self.game);
            std::thread::sleep(Duration::from_millis(self.delay_ms));
        }

        if let Some(winner) = self.game.winner() {
            println!("{} wins", winner);
        }
    }
}
