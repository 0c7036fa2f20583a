//! seram command-line entry point

use clap::Parser;
use seram_cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
