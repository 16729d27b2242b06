// src/system/process.rs

use nix::sys::signal::{self, SigSet, Signal};
use nix::unistd::Pid;
use std::io::{self, ErrorKind};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpawnError {
    /// The OS would not create a new process at all (resource exhaustion,
    /// limits).
    #[error("The OS refused to create a new process: {0}")]
    Refused(#[source] io::Error),
    /// A process was created but the requested program never started
    /// executing in it (unresolvable name, permissions).
    #[error("The program could not be executed: {0}")]
    ExecFailed(#[source] io::Error),
}

/// The supervisor's only window onto the OS process table. Handlers and the
/// shutdown path go through this trait, so tests can swap in a recording
/// fake and exercise the full command surface without spawning anything.
pub trait ProcessBackend: Send + Sync {
    /// Starts `program` with `args`, resolved via the OS search path, with
    /// the standard streams inherited. Fire and forget: the child is never
    /// waited on.
    fn spawn(&self, program: &str, args: &[String]) -> Result<Pid, SpawnError>;

    /// Sends SIGKILL. The target gets no opportunity to intercept or veto.
    fn kill(&self, pid: Pid) -> io::Result<()>;

    /// Applies a niceness value to a running process. Out-of-range values
    /// are passed through; whatever clamping the OS does is accepted as-is.
    fn set_niceness(&self, pid: Pid, niceness: i32) -> io::Result<()>;
}

/// The real backend.
#[derive(Debug)]
pub struct OsProcesses;

impl ProcessBackend for OsProcesses {
    #[allow(unsafe_code)]
    fn spawn(&self, program: &str, args: &[String]) -> Result<Pid, SpawnError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // The interpreter keeps SIGINT blocked in every thread so the
            // shutdown thread can receive it synchronously; the mask would
            // otherwise leak across exec into the child.
            unsafe {
                command.pre_exec(|| {
                    let mut sigint = SigSet::empty();
                    sigint.add(Signal::SIGINT);
                    sigint.thread_unblock().map_err(io::Error::from)
                });
            }
        }

        // The standard library relays child-side exec failure to the parent
        // over a CLOEXEC pipe, so a bad program name surfaces here instead
        // of as a silently dying child.
        let child = command.spawn().map_err(classify_spawn_error)?;

        #[allow(clippy::cast_possible_wrap)]
        let pid = Pid::from_raw(child.id() as i32);
        Ok(pid)
    }

    fn kill(&self, pid: Pid) -> io::Result<()> {
        signal::kill(pid, Signal::SIGKILL).map_err(io::Error::from)
    }

    #[allow(unsafe_code)]
    fn set_niceness(&self, pid: Pid, niceness: i32) -> io::Result<()> {
        // setpriority(2) returns 0 on success and -1 on error; unlike
        // getpriority(2) there is no ambiguity with legal return values.
        let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS as _, pid.as_raw() as _, niceness) };
        if rc == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// Splits spawn failures into the two outcomes the command surface reports:
/// exec-time failures (the program itself is the problem) versus the OS
/// declining to create a process at all.
fn classify_spawn_error(error: io::Error) -> SpawnError {
    match error.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => SpawnError::ExecFailed(error),
        _ => SpawnError::Refused(error),
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_kill_real_process() {
        // --- Setup ---
        let backend = OsProcesses;

        // --- Execute ---
        let pid = backend
            .spawn("sleep", &["30".to_string()])
            .expect("spawning `sleep` must succeed on a Unix test host");

        // --- Assert ---
        assert!(pid.as_raw() > 0);
        backend.kill(pid).expect("SIGKILL to a live child must succeed");
    }

    #[test]
    fn test_spawn_unknown_program_is_exec_failure() {
        let backend = OsProcesses;
        let result = backend.spawn("formic-test-no-such-program", &[]);
        assert!(matches!(result, Err(SpawnError::ExecFailed(_))));
    }

    #[test]
    fn test_set_niceness_on_live_child() {
        let backend = OsProcesses;
        let pid = backend
            .spawn("sleep", &["30".to_string()])
            .expect("spawning `sleep` must succeed on a Unix test host");

        // Lowering priority (raising niceness) never needs privileges.
        backend
            .set_niceness(pid, 10)
            .expect("raising a child's niceness must succeed");

        backend.kill(pid).expect("SIGKILL to a live child must succeed");
    }

    #[test]
    fn test_kill_unknown_pid_reports_error() {
        let backend = OsProcesses;
        // PID max on Linux defaults to 4194304; this one cannot exist.
        let result = backend.kill(Pid::from_raw(i32::MAX - 1));
        assert!(result.is_err());
    }
}
