use std::{io, process};

use clap::Parser;
use keypair_base58::{cli::Cli, run};
use log::*;

fn init_logger() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .format_timestamp_micros()
    .init();
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let source = cli.source();
    let mut stdout = io::stdout().lock();
    if let Err(err) = run(&source, cli.part, &mut stdout) {
        error!("Failed to convert keypair from {}", source);
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
