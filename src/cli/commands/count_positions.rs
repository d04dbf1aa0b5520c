//! Count positions command - count legal paths down to a given depth.

use std::time::{Duration, Instant};

use checkers::board::player::Player;
use checkers::board::Board;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let mut total_positions = 0;
        let mut total_duration = Duration::from_secs(0);

        for depth in 0..self.depth {
            let mut board = Board::default();

            let started = Instant::now();
            let count = match board.count_positions(depth, Player::Black) {
                Ok(count) => count,
                Err(err) => {
                    eprintln!("Failed to count positions: {}", err);
                    std::process::exit(1);
                }
            };
            let duration = started.elapsed();
            let positions_per_second = count as f64 / duration.as_secs_f64();

            total_positions += count;
            total_duration += duration;

            println!(
                "depth: {}, positions: {}, positions per second: {}",
                depth + 1,
                count,
                positions_per_second
            );
        }

        println!(
            "total positions: {}, total duration: {:?}, positions per second: {}",
            total_positions,
            total_duration,
            total_positions as f64 / total_duration.as_secs_f64()
        );
    }
}
