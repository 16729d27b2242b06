// src/core/launcher.rs

use crate::{models::CommandError, session::Session, system::process::SpawnError};
use nix::unistd::Pid;

/// Spawns one external process and registers its handle.
///
/// The handle enters the registry the moment the spawn succeeds, before any
/// niceness is applied: the process is already running at that point, and a
/// failed renice must not leave it unsupervised. `niceness` of `None` leaves
/// the child's inherited priority untouched.
pub fn launch(
    session: &Session,
    tokens: &[String],
    niceness: Option<i32>,
) -> Result<Pid, CommandError> {
    let (program, args) = tokens.split_first().ok_or(CommandError::InvalidArgument)?;
    log::debug!("Spawning '{}' with {} argument(s)", program, args.len());

    let pid = session
        .backend
        .spawn(program, args)
        .map_err(|e| match e {
            SpawnError::Refused(source) => {
                log::debug!("Process creation refused: {}", source);
                CommandError::ForkFailure
            }
            SpawnError::ExecFailed(source) => {
                log::debug!("'{}' never started executing: {}", program, source);
                CommandError::InvalidProcessInput
            }
        })?;

    session.registry.insert(pid);

    if let Some(value) = niceness {
        if let Err(e) = session.backend.set_niceness(pid, value) {
            // Non-fatal: the process runs either way, just at the priority
            // it inherited.
            log::warn!("Could not set niceness {} on PID {}: {}", value, pid, e);
        }
    }

    Ok(pid)
}

/// Launches a token sequence as one or more independent processes.
///
/// A literal `&&` splits the sequence into groups, each spawned in order as
/// its own fire-and-forget process (nothing is piped or waited on). The
/// first group that fails to spawn aborts the remainder and its outcome is
/// reported.
pub fn launch_groups(session: &Session, tokens: &[String]) -> Result<(), CommandError> {
    for group in split_groups(tokens)? {
        launch(session, group, None)?;
    }
    Ok(())
}

/// An empty group (`x && && y`, a leading or a trailing `&&`) has no program
/// to run and is rejected outright.
fn split_groups(tokens: &[String]) -> Result<Vec<&[String]>, CommandError> {
    let mut groups = Vec::new();
    for group in tokens.split(|token| token == "&&") {
        if group.is_empty() {
            return Err(CommandError::InvalidArgument);
        }
        groups.push(group);
    }
    Ok(groups)
}
