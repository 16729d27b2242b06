// src/core/terminator.rs

use crate::{models::CommandError, session::Session};
use nix::unistd::Pid;

/// Kills a single registered process named by its textual PID argument.
///
/// Text that does not parse as a PID is `InvalidArgument`; a PID that parses
/// but is not registered is `InvalidPid`. The two are distinct failures and
/// are never conflated. On a registered handle, SIGKILL is dispatched and
/// the entry is removed unconditionally, whether or not the OS still knew
/// the process: the supervisor verifies that it fired the request, not that
/// the target died.
pub fn kill_one(session: &Session, handle_arg: &str) -> Result<(), CommandError> {
    let raw: i32 = handle_arg
        .parse()
        .map_err(|_| CommandError::InvalidArgument)?;
    let pid = Pid::from_raw(raw);

    if !session.registry.contains(pid) {
        return Err(CommandError::InvalidPid);
    }

    dispatch_kill(session, pid);
    session.registry.remove(pid);
    Ok(())
}

/// Kills every registered process and empties the registry. Always
/// succeeds; on an empty registry it is a no-op, which also makes it
/// idempotent.
pub fn kill_all(session: &Session) {
    for pid in session.registry.drain() {
        dispatch_kill(session, pid);
    }
}

fn dispatch_kill(session: &Session, pid: Pid) {
    log::debug!("Sending SIGKILL to PID {}", pid);
    if let Err(e) = session.backend.kill(pid) {
        // Expected for children that exited on their own: exits are never
        // reaped, so the registry can be stale. The entry goes either way.
        log::warn!("Kill dispatch to PID {} failed: {}", pid, e);
    }
}
