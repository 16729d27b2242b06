// src/cli/handlers/kill.rs

use crate::{cli::banner, core::terminator, models::CommandError, session::Session};

/// `kill <pid>` — forcefully terminate one supervised process.
pub fn handle(arguments: Vec<String>, session: &Session) -> Result<(), CommandError> {
    let [handle_arg] = arguments.as_slice() else {
        return Err(CommandError::InvalidArgumentNumber);
    };
    terminator::kill_one(session, handle_arg)?;
    banner::echo_kill(&format!("kill {}", handle_arg));
    Ok(())
}
