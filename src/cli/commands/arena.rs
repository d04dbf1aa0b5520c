//! Arena command - pit a random player against the search.

use checkers::game::{Arena, ArenaConfig};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct ArenaArgs {
    #[structopt(short, long, default_value = "10")]
    pub games: usize,
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(long = "max-turns", default_value = "500")]
    pub max_turns: u32,
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl Command for ArenaArgs {
    fn execute(self) {
        let config = ArenaConfig {
            games: self.games,
            depth: self.depth,
            max_turns: self.max_turns,
            seed: self.seed,
        };

        match Arena::new(config).play() {
            Ok(result) => {
                println!("black (random) wins: {}", result.black_wins);
                println!("white (depth {}) wins: {}", self.depth, result.white_wins);
                println!("draws: {}", result.draws);
            }
            Err(err) => {
                eprintln!("Arena failed: {}", err);
                std::process::exit(1);
            }
        }
    }
}
