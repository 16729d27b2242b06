// src/cli/handlers/killall.rs

use crate::{cli::banner, core::terminator, models::CommandError, session::Session};

/// `killall` — forcefully terminate every supervised process. Succeeds
/// even when there is nothing to kill.
pub fn handle(arguments: Vec<String>, session: &Session) -> Result<(), CommandError> {
    if !arguments.is_empty() {
        return Err(CommandError::InvalidArgumentNumber);
    }
    terminator::kill_all(session);
    banner::echo_kill("killall");
    Ok(())
}
