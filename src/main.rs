use clap::Parser;
use tradebook::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
