use super::console::Console;
use super::prompt::ask;
use crate::control::LineEditor;
use crate::error::AppResult;
use crate::store::UserStore;

/// Ask for a name and drop every record carrying it.
pub fn remove(
    store: &mut UserStore,
    editor: &mut dyn LineEditor,
    console: &mut Console<'_>,
) -> AppResult<()> {
    let name = ask(editor, "Enter name")?;

    match store.remove(&name) {
        Ok(_) => console.success("User deleted!")?,
        Err(err) => console.error(&err.to_string())?,
    }
    Ok(())
}
