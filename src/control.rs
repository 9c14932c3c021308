use crate::complete::helper::UsersHelper;
use crate::conf::ConfigurationModel;
use crate::control_state::{ControlFlow, ControlState};
use crate::error::AppResult;
use crate::process::console::Console;
use crate::process::prompt::is_action_prompt;
use crate::process::welcome::welcome;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::io::{self, Write};
use tracing::debug;

/// Source of operator answers: one blocking question and answer per call.
pub trait LineEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool>;
}

impl LineEditor for Editor<UsersHelper, DefaultHistory> {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        if let Some(helper) = self.helper_mut() {
            helper.set_action_prompt(is_action_prompt(prompt));
        }
        Editor::readline(self, prompt)
    }

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool> {
        Editor::add_history_entry(self, entry)
    }
}

/// Run an interactive session on the terminal until the operator quits.
pub fn control_loop(config: &ConfigurationModel) -> AppResult<()> {
    let mut editor = build_editor(config)?;
    let mut state = ControlState::with_config(config);
    let mut stdout = io::stdout();

    if config.ui.banner_enabled() {
        welcome(&mut Console::new(&mut stdout, state.color()))?;
    }

    run_loop_with_editor(&mut state, &mut editor, &mut stdout)
}

/// Drive the action loop with any line editor and output sink.
///
/// Returns once `quit` is chosen or input ends; both print the farewell line.
pub fn run_loop_with_editor<E: LineEditor, W: Write>(
    state: &mut ControlState,
    editor: &mut E,
    sink: &mut W,
) -> AppResult<()> {
    loop {
        let prompt = state.prompt();
        sink.flush()?;

        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                debug!("input closed at action prompt");
                state.farewell(sink)?;
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let entry = line.trim();
        if !entry.is_empty() {
            editor.add_history_entry(entry)?;
        }

        match state.handle_line(&line, editor, sink) {
            Ok(ControlFlow::Continue) => {}
            Ok(ControlFlow::Exit) => break,
            Err(err) if err.is_end_of_input() => {
                debug!("input closed during action");
                state.farewell(sink)?;
                break;
            }
            Err(err) => return Err(err),
        }
    }

    debug!(users = state.store().len(), "control loop finished");
    Ok(())
}

fn build_editor(config: &ConfigurationModel) -> AppResult<Editor<UsersHelper, DefaultHistory>> {
    let editor_config = Config::builder()
        .max_history_size(config.control.history_size())?
        .auto_add_history(false)
        .build();

    let mut editor = Editor::with_config(editor_config)?;
    editor.set_helper(Some(UsersHelper::new(
        HistoryHinter::new(),
        config.ui.color_enabled(),
    )));
    Ok(editor)
}
