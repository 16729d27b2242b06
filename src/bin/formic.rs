// src/bin/formic.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use formic::{
    cli::{Cli, dispatcher},
    core::config_loader,
    session::Session,
    system::shutdown,
};
use std::io::{self, BufRead, Write};

/// The main entry point. Sets up logging and config, wires the shutdown
/// thread, then hands over to the read-evaluate loop.
fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config_loader::load_or_init()?;
    let session = Session::from_config(&config, cli.editor);
    // Must happen before the first read: SIGINT gets masked process-wide
    // here, and the shutdown thread takes over its delivery.
    shutdown::install(session.clone())?;
    repl(&session)
}

/// The blocking read-evaluate loop. Command failures are printed and
/// swallowed; nothing a command does ends the interpreter. Returns only on
/// end of input — the SIGINT path exits the process without ever coming
/// back here.
fn repl(session: &Session) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", session.prompt.magenta());
        io::stdout().flush().context("Failed to flush the prompt")?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            // End of input. Supervised processes keep running; only the
            // SIGINT path tears them down.
            println!();
            return Ok(());
        }

        let Some(tokens) = shlex::split(line.trim()) else {
            log::debug!("Input failed to tokenize, ignoring: {:?}", line.trim());
            continue;
        };
        if tokens.is_empty() {
            continue;
        }

        if let Err(e) = dispatcher::dispatch(tokens, session) {
            println!("{}", e.to_string().red());
        }
    }
}
