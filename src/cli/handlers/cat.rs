// src/cli/handlers/cat.rs

use crate::{cli::banner, models::CommandError, session::Session, system::fs_view};
use std::io::{self, Write};
use std::path::Path;

/// `cat <path>` — dump a regular file to the terminal, byte for byte.
pub fn handle(arguments: Vec<String>, _session: &Session) -> Result<(), CommandError> {
    let [path_arg] = arguments.as_slice() else {
        return Err(CommandError::InvalidArgumentNumber);
    };
    let contents = fs_view::read_regular_file(Path::new(path_arg))
        .map_err(|_| CommandError::InvalidFilePath)?;

    banner::echo_cat(&format!("cat {}", path_arg));
    let mut stdout = io::stdout().lock();
    let _ = stdout.write_all(&contents);
    let _ = writeln!(stdout);
    Ok(())
}
