// src/cli/mod.rs

use clap::Parser;

pub mod banner;
pub mod dispatcher;
pub mod handlers;

/// formic: a tiny interactive shell that launches and supervises child
/// processes.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Override the configured editor program for this session.
    #[arg(long, value_name = "PROGRAM")]
    pub editor: Option<String>,
}
