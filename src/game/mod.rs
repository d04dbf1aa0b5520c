pub mod arena;
pub mod game;


pub use arena::{Arena, ArenaConfig, ArenaResult};
pub use game::{Game, GameError, StepOutcome, FIRST_TURN};
