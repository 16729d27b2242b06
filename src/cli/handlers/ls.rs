// src/cli/handlers/ls.rs

use crate::{
    models::CommandError,
    session::Session,
    system::fs_view::{self, EntryKind},
};
use colored::Colorize;
use std::path::Path;

/// `ls` — colored listing of the current directory. Directories in blue,
/// regular files plain, everything else in red.
pub fn handle(arguments: Vec<String>, _session: &Session) -> Result<(), CommandError> {
    if !arguments.is_empty() {
        return Err(CommandError::InvalidArgumentNumber);
    }
    let entries =
        fs_view::list_dir(Path::new(".")).map_err(|_| CommandError::InvalidFilePath)?;
    for entry in &entries {
        match entry.kind {
            EntryKind::Directory => print!("{}\t", entry.name.blue()),
            EntryKind::Regular => print!("{}\t", entry.name),
            EntryKind::Other => print!("{}\t", entry.name.red()),
        }
    }
    println!();
    Ok(())
}
