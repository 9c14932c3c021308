//! State backing the interactive control loop.

use crate::cmd::action;
use crate::conf::ConfigurationModel;
use crate::control::LineEditor;
use crate::error::AppResult;
use crate::process;
use crate::process::console::Console;
use crate::process::prompt::{ACTION_QUESTION, format_prompt};
use crate::store::UserStore;
use std::io::Write;
use tracing::debug;

/// Signals whether the control loop should continue or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading actions.
    Continue,
    /// Terminate the control loop.
    Exit,
}

/// Owns the user store for the lifetime of a session.
pub struct ControlState {
    store: UserStore,
    color: bool,
}

impl ControlState {
    /// Build a state with an empty store and default presentation settings.
    pub fn new() -> Self {
        Self::with_config(&ConfigurationModel::default())
    }

    pub fn with_config(config: &ConfigurationModel) -> Self {
        Self {
            store: UserStore::new(),
            color: config.ui.color_enabled(),
        }
    }

    /// Toggle ANSI colouring of status lines.
    pub fn set_color(&mut self, enabled: bool) {
        self.color = enabled;
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// The top-level action prompt.
    pub fn prompt(&self) -> String {
        format_prompt(ACTION_QUESTION)
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut UserStore {
        &mut self.store
    }

    /// Parse and run one action line, asking follow-up questions through `editor`.
    pub fn handle_line(
        &mut self,
        line: &str,
        editor: &mut dyn LineEditor,
        out: &mut dyn Write,
    ) -> AppResult<ControlFlow> {
        let action = action::parse(line);
        debug!(?action, "dispatching action");

        let mut console = Console::new(out, self.color);
        let flow = process::execute(&action, &mut self.store, editor, &mut console)?;
        console.flush()?;
        Ok(flow)
    }

    /// Close the session without a `quit` action, e.g. on end of input.
    pub fn farewell(&self, out: &mut dyn Write) -> AppResult<()> {
        process::quit::farewell(&mut Console::new(out, self.color))?;
        Ok(())
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}
