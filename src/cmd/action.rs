//! Action keyword parsing for the top-level prompt.

use shlex;

/// Keywords accepted at the top-level prompt, in help order.
pub const ACTION_KEYWORDS: [&str; 5] = ["list", "add", "edit", "remove", "quit"];

/// One-line help for each action, shown in the startup banner.
pub const ACTION_HELP: [(&str, &str); 5] = [
    ("list", "show all users"),
    ("add", "add new user to the list"),
    ("edit", "edit user on the list"),
    ("remove", "remove user from the list"),
    ("quit", "quit the app"),
];

/// A parsed top-level command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Edit,
    Remove,
    Quit,
    /// Anything that is not exactly one known keyword; carries the raw input.
    Unrecognized(String),
}

impl Action {
    /// Keyword that selects this action, if it is a known one.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Action::List => Some("list"),
            Action::Add => Some("add"),
            Action::Edit => Some("edit"),
            Action::Remove => Some("remove"),
            Action::Quit => Some("quit"),
            Action::Unrecognized(_) => None,
        }
    }
}

/// Parse a line typed at the action prompt.
///
/// The line is split with shell-like rules and must hold exactly one token
/// matching a keyword (case-sensitive).
pub fn parse(input: &str) -> Action {
    let Some(tokens) = shlex::split(input) else {
        return Action::Unrecognized(input.to_string());
    };

    match tokens.as_slice() {
        [keyword] => from_keyword(keyword),
        _ => Action::Unrecognized(input.trim().to_string()),
    }
}

fn from_keyword(keyword: &str) -> Action {
    match keyword {
        "list" => Action::List,
        "add" => Action::Add,
        "edit" => Action::Edit,
        "remove" => Action::Remove,
        "quit" => Action::Quit,
        other => Action::Unrecognized(other.to_string()),
    }
}
