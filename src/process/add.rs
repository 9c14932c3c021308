use super::console::Console;
use super::prompt::ask;
use crate::control::LineEditor;
use crate::error::AppResult;
use crate::store::{User, UserStore, parse_age};

/// Ask for a name and an age, then insert the record.
pub fn add(
    store: &mut UserStore,
    editor: &mut dyn LineEditor,
    console: &mut Console<'_>,
) -> AppResult<()> {
    let name = ask(editor, "Enter name")?;
    let answer = ask(editor, "Enter age")?;
    // Unparseable answers become NaN so validation reports the age.
    let age = parse_age(&answer).unwrap_or(f64::NAN);

    match store.add(User::new(name, age)) {
        Ok(()) => console.success("User has been successfully added!")?,
        Err(err) => console.error(&err.to_string())?,
    }
    Ok(())
}
