// src/cli/handlers/pids.rs

use crate::{models::CommandError, session::Session};
use colored::Colorize;

/// `pids` — print the live registry. The underlying set is unordered; the
/// listing is sorted so consecutive calls read the same.
pub fn handle(arguments: Vec<String>, session: &Session) -> Result<(), CommandError> {
    if !arguments.is_empty() {
        return Err(CommandError::InvalidArgumentNumber);
    }
    let mut pids = session.registry.snapshot();
    pids.sort_unstable();
    let listing = pids
        .iter()
        .map(|pid| pid.to_string())
        .collect::<Vec<_>>()
        .join("\t");
    println!("{}\t{}", t!("ui.pids_label").bold(), listing);
    Ok(())
}
