//! Action handlers and console rendering for the interactive session.

pub mod add;
pub mod console;
pub mod edit;
pub mod list;
pub mod prompt;
pub mod quit;
pub mod remove;
pub mod table;
pub mod welcome;

use crate::cmd::action::Action;
use crate::control::LineEditor;
use crate::control_state::ControlFlow;
use crate::error::AppResult;
use crate::store::UserStore;
use self::console::Console;
use tracing::debug;

/// Run one action against the store, writing its feedback to the console.
pub fn execute(
    action: &Action,
    store: &mut UserStore,
    editor: &mut dyn LineEditor,
    console: &mut Console<'_>,
) -> AppResult<ControlFlow> {
    match action {
        Action::List => list::list(store, console)?,
        Action::Add => add::add(store, editor, console)?,
        Action::Edit => edit::edit(store, editor, console)?,
        Action::Remove => remove::remove(store, editor, console)?,
        Action::Quit => {
            quit::farewell(console)?;
            return Ok(ControlFlow::Exit);
        }
        Action::Unrecognized(input) => {
            debug!(input = input.as_str(), "unrecognized action");
            console.error("Command not found")?;
        }
    }

    Ok(ControlFlow::Continue)
}
