use super::console::Console;
use super::prompt::ask;
use crate::control::LineEditor;
use crate::error::AppResult;
use crate::store::{StoreError, User, UserStore, parse_age};

/// Locate a record by name, then overwrite it with a freshly prompted name and age.
///
/// A missing record is reported before any new values are requested. The new
/// values are stored without validation; a non-numeric age is kept as NaN.
pub fn edit(
    store: &mut UserStore,
    editor: &mut dyn LineEditor,
    console: &mut Console<'_>,
) -> AppResult<()> {
    let target = ask(editor, "Enter name to edit")?;
    if store.find(&target).is_none() {
        console.error(&StoreError::NotFound(target).to_string())?;
        return Ok(());
    }

    let name = ask(editor, "Enter new name")?;
    let answer = ask(editor, "Enter new age")?;
    let age = parse_age(&answer).unwrap_or(f64::NAN);

    match store.edit(&target, User::new(name, age)) {
        Ok(()) => console.success("User edited!")?,
        Err(err) => console.error(&err.to_string())?,
    }
    Ok(())
}
