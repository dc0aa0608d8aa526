use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::{Context, Result};
use log::info;

use memsim::command::CommandReader;
use memsim::config::Config;
use memsim::driver::{self, Outcome};
use memsim::Megabyte;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = Config::from_args(std::env::args_os().skip(1))?;

    let output = File::create(&config.output)
        .with_context(|| format!("Cannot open {}", config.output.display()))?;
    let input = File::open(&config.input)
        .with_context(|| format!("Cannot open {}", config.input.display()))?;

    let mut table = Megabyte::new();
    let commands = CommandReader::new(BufReader::new(input));
    let outcome = driver::run(&mut table, commands, BufWriter::new(output))
        .with_context(|| format!("Invalid input in {}", config.input.display()))?;

    match outcome {
        Outcome::Stopped => info!("simulation stopped"),
        Outcome::Exhausted => info!("end of {} reached", config.input.display()),
    }
    Ok(())
}
