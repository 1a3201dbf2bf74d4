use clap::Parser;
use watchlist::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
