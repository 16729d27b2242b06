// src/cli/handlers/nice.rs

use crate::{core::launcher, models::CommandError, session::Session};

/// `nice <priority> <program...>` — launch one external process at the
/// given niceness. Lower values are favored by the scheduler; whatever
/// range and clamping the OS enforces is passed through unvalidated.
pub fn handle(arguments: Vec<String>, session: &Session) -> Result<(), CommandError> {
    let Some((priority_arg, launch_tokens)) = arguments.split_first() else {
        return Err(CommandError::InvalidArgumentNumber);
    };
    if launch_tokens.is_empty() {
        return Err(CommandError::InvalidArgumentNumber);
    }
    let niceness: i32 = priority_arg
        .parse()
        .map_err(|_| CommandError::InvalidArgument)?;
    launcher::launch(session, launch_tokens, Some(niceness))?;
    Ok(())
}
