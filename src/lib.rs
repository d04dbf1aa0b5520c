pub mod board;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generator;
pub mod searcher;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;

pub use common::coordinates::{Direction, Square};
