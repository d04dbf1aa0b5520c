mod cli;

use cli::commands::Command;
use cli::Checkers;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    init_instrumentation();

    Checkers::from_args().execute();

    #[cfg(feature = "instrumentation")]
    checkers::instrumentation::print_timing_statistics();
}

#[cfg(feature = "instrumentation")]
fn init_instrumentation() {
    if let Err(err) = checkers::instrumentation::init_tracing() {
        eprintln!("Failed to set tracing subscriber: {}", err);
    }
}

#[cfg(not(feature = "instrumentation"))]
fn init_instrumentation() {}
