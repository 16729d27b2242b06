// src/session.rs

use crate::{
    constants,
    core::registry::ProcessRegistry,
    models::ShellConfig,
    system::process::{OsProcesses, ProcessBackend},
};
use std::sync::Arc;

/// Everything a command handler needs, owned explicitly and passed down
/// instead of living in process-wide globals. The registry and the backend
/// are shared with the shutdown thread, so both sit behind `Arc`.
#[derive(Clone)]
pub struct Session {
    pub registry: Arc<ProcessRegistry>,
    pub backend: Arc<dyn ProcessBackend>,
    pub prompt: String,
    pub editor: String,
}

impl Session {
    /// Builds a session against the real OS backend, resolving prompt and
    /// editor from config with an optional CLI-level editor override.
    pub fn from_config(config: &ShellConfig, editor_override: Option<String>) -> Self {
        let prompt = config
            .prompt
            .clone()
            .unwrap_or_else(|| constants::DEFAULT_PROMPT.to_string());
        let editor = editor_override
            .or_else(|| config.editor.clone())
            .unwrap_or_else(|| constants::DEFAULT_EDITOR.to_string());
        Self {
            registry: Arc::new(ProcessRegistry::new()),
            backend: Arc::new(OsProcesses),
            prompt,
            editor,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("registry", &self.registry)
            .field("prompt", &self.prompt)
            .field("editor", &self.editor)
            .finish_non_exhaustive()
    }
}
