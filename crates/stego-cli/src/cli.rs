use clap::{Parser, Subcommand};
use dialoguer::Password;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(visible_alias = "encode")]
    Hide(hide::HideArgs),
    #[command(visible_alias = "decode")]
    Unveil(unveil::UnveilArgs),
}

/// Picks the password given on the command line, or asks for one if requested.
/// An empty answer means no password.
pub fn resolve_password(password: Option<String>, ask: bool, confirm: bool) -> Option<String> {
    if password.is_some() || !ask {
        return password;
    }

    ask_for_password(confirm)
}

pub fn ask_for_password(confirm: bool) -> Option<String> {
    let mut prompt = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    prompt.interact().ok().filter(|p| !p.is_empty())
}
