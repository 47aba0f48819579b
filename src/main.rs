mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use stack_logger::StackLogger;
use std::io::{self, BufRead};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.options()?;
    log::debug!("starting with {options:?}");

    let logger = StackLogger::new(options);

    if cli.messages.is_empty() {
        cli::run(&cli, logger, io::stdin().lock().lines())
    } else {
        cli::run(&cli, logger, cli.messages.iter().cloned().map(Ok))
    }
}

#[cfg(test)]
mod cli_tests;
