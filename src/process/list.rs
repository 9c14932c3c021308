use super::console::Console;
use super::table;
use crate::error::AppResult;
use crate::store::UserStore;

/// Show every record, or an info line when the store is empty.
pub fn list(store: &UserStore, console: &mut Console<'_>) -> AppResult<()> {
    if store.is_empty() {
        console.info("No Data... ")?;
        return Ok(());
    }

    console.info("Users data: ")?;
    for line in table::render(store.list()) {
        console.line(&line)?;
    }
    Ok(())
}
