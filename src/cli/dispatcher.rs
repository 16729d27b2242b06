// src/cli/dispatcher.rs

use crate::{cli::handlers, core::launcher, models::CommandError, session::Session};

/// Defines a builtin command, its aliases, and its handler function.
/// The handler signature is kept consistent across all commands for
/// simplicity in the registry.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>, &Session) -> Result<(), CommandError>,
}

/// The single source of truth for all builtin commands. To add a new
/// builtin, add an entry to this static array.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "cat",
        aliases: &[],
        handler: handlers::cat::handle,
    },
    CommandDefinition {
        name: "edit",
        aliases: &["ed"],
        handler: handlers::edit::handle,
    },
    CommandDefinition {
        name: "kill",
        aliases: &[],
        handler: handlers::kill::handle,
    },
    CommandDefinition {
        name: "killall",
        aliases: &[],
        handler: handlers::killall::handle,
    },
    CommandDefinition {
        name: "ls",
        aliases: &[],
        handler: handlers::ls::handle,
    },
    CommandDefinition {
        name: "nice",
        aliases: &[],
        handler: handlers::nice::handle,
    },
    CommandDefinition {
        name: "pids",
        aliases: &[],
        handler: handlers::pids::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Routes one tokenized input line. Builtins win; anything else is handed
/// to the launcher as an external invocation, so `UnknownCommand` stays an
/// internal routing signal and never leaves this function.
pub fn dispatch(tokens: Vec<String>, session: &Session) -> Result<(), CommandError> {
    log::debug!("Dispatching tokens: {:?}", tokens);
    match dispatch_builtin(&tokens, session) {
        Err(CommandError::UnknownCommand) => launcher::launch_groups(session, &tokens),
        outcome => outcome,
    }
}

fn dispatch_builtin(tokens: &[String], session: &Session) -> Result<(), CommandError> {
    let Some((name, arguments)) = tokens.split_first() else {
        // Blank input is filtered by the REPL; nothing to index.
        return Ok(());
    };
    let command = find_command(name).ok_or(CommandError::UnknownCommand)?;
    (command.handler)(arguments.to_vec(), session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::fake_session;
    use nix::unistd::Pid;

    fn line(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_builtin_arity_violations_have_no_side_effects() {
        let (session, backend) = fake_session();
        session.registry.insert(Pid::from_raw(100));

        for input in [
            line(&["kill"]),
            line(&["kill", "100", "200"]),
            line(&["killall", "now"]),
            line(&["pids", "all"]),
            line(&["nice", "10"]),
        ] {
            assert_eq!(
                dispatch(input, &session),
                Err(CommandError::InvalidArgumentNumber)
            );
        }

        assert_eq!(session.registry.len(), 1);
        assert!(backend.killed.lock().unwrap().is_empty());
        assert!(backend.spawned.lock().unwrap().is_empty());
    }

    #[test]
    fn test_kill_with_unknown_handle_leaves_registry_unchanged() {
        let (session, _backend) = fake_session();
        session.registry.insert(Pid::from_raw(100));

        assert_eq!(
            dispatch(line(&["kill", "999999"]), &session),
            Err(CommandError::InvalidPid)
        );
        assert!(session.registry.contains(Pid::from_raw(100)));
    }

    #[test]
    fn test_non_builtin_falls_back_to_external_launch() {
        let (session, backend) = fake_session();

        dispatch(line(&["echo", "hi"]), &session).unwrap();

        assert_eq!(backend.spawned_programs(), vec!["echo"]);
        assert_eq!(session.registry.len(), 1);
    }

    #[test]
    fn test_chained_launch_registers_both_handles_in_order() {
        let (session, backend) = fake_session();

        dispatch(line(&["false", "&&", "true"]), &session).unwrap();

        assert_eq!(backend.spawned_programs(), vec!["false", "true"]);
        assert_eq!(session.registry.len(), 2);
    }

    #[test]
    fn test_nice_applies_priority_to_exactly_one_new_handle() {
        let (session, backend) = fake_session();

        dispatch(line(&["nice", "10", "sleep", "5"]), &session).unwrap();

        assert_eq!(session.registry.len(), 1);
        let reniced = backend.reniced.lock().unwrap();
        assert_eq!(reniced.len(), 1);
        assert!(matches!(reniced.first(), Some((_, 10))));
    }

    #[test]
    fn test_nice_with_garbage_priority_is_invalid_argument() {
        let (session, _backend) = fake_session();
        assert_eq!(
            dispatch(line(&["nice", "fast", "sleep", "5"]), &session),
            Err(CommandError::InvalidArgument)
        );
    }

    #[test]
    fn test_aliases_resolve_to_their_command() {
        let (session, backend) = fake_session();

        dispatch(line(&["ed"]), &session).unwrap();

        assert_eq!(backend.spawned_programs(), vec!["fake-editor"]);
    }

    #[test]
    fn test_kill_roundtrip_through_the_full_command_surface() {
        // launch → pids-visible → kill: the registry ends up exactly at
        // launches minus kills.
        let (session, backend) = fake_session();

        dispatch(line(&["sleep", "60"]), &session).unwrap();
        let pid = *session.registry.snapshot().first().unwrap();

        dispatch(line(&["kill", &pid.to_string()]), &session).unwrap();

        assert!(session.registry.is_empty());
        assert_eq!(*backend.killed.lock().unwrap(), vec![pid]);
    }
}
