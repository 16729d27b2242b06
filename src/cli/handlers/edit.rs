// src/cli/handlers/edit.rs

use crate::{core::launcher, models::CommandError, session::Session};

/// `edit [path]` — open the configured editor, optionally on a file,
/// through the same launch path as any external command. The editor is a
/// supervised process like any other: it lands in the registry and dies to
/// `kill`/`killall` too.
pub fn handle(arguments: Vec<String>, session: &Session) -> Result<(), CommandError> {
    if arguments.len() > 1 {
        return Err(CommandError::InvalidArgumentNumber);
    }
    let mut tokens = vec![session.editor.clone()];
    tokens.extend(arguments);

    let pid = launcher::launch(session, &tokens, None)
        .map_err(|_| CommandError::UnableToOpenEditor)?;
    println!("{}\t{}", t!("ui.editor_opened"), pid);
    Ok(())
}
