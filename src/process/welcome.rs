use super::console::Console;
use crate::cmd::action::ACTION_HELP;
use std::io;
use terminal_size::{Width, terminal_size};

const RULE_WIDTH: usize = 36;

/// Print the greeting and the list of available actions.
pub fn welcome(console: &mut Console<'_>) -> io::Result<()> {
    gap(console)?;
    console.line("👋 Welcome to the UsersApp!")?;
    console.line(&"=".repeat(rule_width()))?;
    console.info("Available actions")?;
    gap(console)?;
    for (keyword, description) in ACTION_HELP {
        console.line(&format!("{keyword} – {description}"))?;
    }
    gap(console)?;
    console.flush()
}

/// Two blank lines separate banner sections.
fn gap(console: &mut Console<'_>) -> io::Result<()> {
    console.blank()?;
    console.blank()
}

/// Width of the rule under the greeting, shrunk to fit narrow terminals.
fn rule_width() -> usize {
    terminal_size()
        .and_then(|(Width(w), _)| usize::try_from(w).ok())
        .filter(|w| *w > 0)
        .map_or(RULE_WIDTH, |w| w.min(RULE_WIDTH))
}
