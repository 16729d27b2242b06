// src/system/shutdown.rs

use crate::{constants, core::terminator, session::Session};
use anyhow::{Context, Result};
use colored::Colorize;
use console::Term;
use nix::sys::signal::{SigSet, Signal};
use std::{process, thread, time::Duration};

/// Base delay of the farewell render; each line waits one step longer than
/// the one before it.
const FAREWELL_STEP: Duration = Duration::from_millis(700);

/// Masks SIGINT process-wide and hands its delivery to a dedicated thread.
///
/// Running teardown inside an asynchronous signal handler would race the
/// REPL thread over the registry. Instead the signal is received
/// synchronously on a thread of its own: it takes the same locks as
/// everyone else, kills everything, renders the farewell and ends the
/// process. Must be called before the REPL starts so the mask is in place
/// on every thread spawned afterwards.
pub fn install(session: Session) -> Result<()> {
    let mut signals = SigSet::empty();
    signals.add(Signal::SIGINT);
    signals
        .thread_block()
        .context("Failed to mask SIGINT on the main thread")?;

    thread::Builder::new()
        .name("shutdown".to_string())
        .spawn(move || listen(&signals, &session))
        .context("Failed to spawn the shutdown thread")?;
    Ok(())
}

fn listen(signals: &SigSet, session: &Session) {
    loop {
        match signals.wait() {
            Ok(signal) => {
                log::debug!("Received {}, starting shutdown", signal.as_str());
                run(session);
            }
            // Spurious wakeup; nothing to tear down yet.
            Err(e) => log::warn!("Waiting for SIGINT failed: {}", e),
        }
    }
}

/// The terminal sequence: bulk kill, farewell, sentinel exit. Never returns
/// to command processing.
fn run(session: &Session) -> ! {
    terminator::kill_all(session);
    farewell_screen();
    process::exit(constants::SHUTDOWN_EXIT_CODE)
}

/// Deterministic, blocking goodbye. Sized from the terminal so it fills the
/// screen, with fixed, increasing delays between the farewell lines. Purely
/// for the user watching; there is no state to verify beyond it running to
/// completion.
fn farewell_screen() {
    let (rows, cols) = Term::stdout().size();
    let rows = usize::from(rows);
    let cols = usize::from(cols);

    println!();
    print_glyph_block(rows / 2, cols / 2);

    let lines = [
        t!("farewell.line_1"),
        t!("farewell.line_2"),
        t!("farewell.line_3"),
        t!("farewell.line_4"),
    ];
    for (i, line) in lines.iter().enumerate() {
        let pad = (cols / 2).saturating_sub(line.chars().count() / 2);
        println!("{}{}", " ".repeat(pad), line.red().bold());
        thread::sleep(FAREWELL_STEP * (i as u32 + 1));
    }

    print_glyph_block((rows / 4).saturating_sub(1), cols / 2);
    thread::sleep(FAREWELL_STEP);
}

fn print_glyph_block(rows: usize, width: usize) {
    let row = format!("{} ", constants::FAREWELL_GLYPH).repeat(width);
    for _ in 0..rows {
        println!("{}\n", row.red());
    }
}
