use std::process::ExitCode;

use clap::Parser;
use log::error;

use cli::{CliArgs, Commands};
use stego_core::StegoError;

mod cli;
mod commands;

pub type CliResult<T> = std::result::Result<T, StegoError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Hide(hide) => hide.run(),
        Commands::Unveil(unveil) => unveil.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
