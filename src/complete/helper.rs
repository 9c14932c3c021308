use crate::cmd::action::ACTION_KEYWORDS;
use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use std::borrow::Cow::{self, Borrowed, Owned};
use rustyline_derive::{Helper, Validator};

/// Line editor helper: keyword completion, history hints and prompt colouring.
///
/// Completion and hints only apply while the action prompt is showing; field
/// prompts such as `Enter name` get plain input.
#[derive(Helper, Validator)]
pub struct UsersHelper {
    hinter: HistoryHinter,
    color: bool,
    action_prompt: bool,
}

impl UsersHelper {
    pub fn new(hinter: HistoryHinter, color: bool) -> Self {
        Self {
            hinter,
            color,
            action_prompt: true,
        }
    }

    /// Record which kind of prompt the next `readline` shows.
    pub fn set_action_prompt(&mut self, action_prompt: bool) {
        self.action_prompt = action_prompt;
    }

    /// Keyword candidates for the current prompt, with the start offset of the word.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<&'static str>) {
        if !self.action_prompt {
            return (pos, Vec::new());
        }
        keyword_candidates(line, pos)
    }
}

impl Completer for UsersHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, keywords) = self.candidates(line, pos);
        let candidates = keywords
            .into_iter()
            .map(|keyword| Pair {
                display: keyword.to_string(),
                replacement: keyword.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for UsersHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        if !self.action_prompt {
            return None;
        }
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for UsersHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if !(default && self.color) {
            return Borrowed(prompt);
        }

        match prompt.strip_prefix('?') {
            Some(rest) => Owned(format!("\x1b[1;32m?\x1b[m\x1b[1m{rest}\x1b[m")),
            None => Owned(format!("\x1b[1m{prompt}\x1b[m")),
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if self.color {
            Owned(format!("\x1b[2m{hint}\x1b[m"))
        } else {
            Borrowed(hint)
        }
    }
}

/// Action keywords completing the word under the cursor, with the word's start offset.
///
/// Only the first word of the line is completed.
pub fn keyword_candidates(line: &str, pos: usize) -> (usize, Vec<&'static str>) {
    let prefix = &line[..pos];
    let start = prefix.len() - prefix.trim_start().len();
    let word = &prefix[start..];
    if word.contains(char::is_whitespace) {
        return (pos, Vec::new());
    }

    let matches = ACTION_KEYWORDS
        .into_iter()
        .filter(|keyword| keyword.starts_with(word))
        .collect();
    (start, matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> UsersHelper {
        UsersHelper::new(HistoryHinter::new(), false)
    }

    #[test]
    fn completes_keyword_prefix() {
        assert_eq!(keyword_candidates("re", 2), (0, vec!["remove"]));
        assert_eq!(keyword_candidates("  l", 3), (2, vec!["list"]));
    }

    #[test]
    fn empty_prefix_offers_every_keyword() {
        assert_eq!(keyword_candidates("", 0), (0, ACTION_KEYWORDS.to_vec()));
    }

    #[test]
    fn later_words_are_not_completed() {
        assert_eq!(keyword_candidates("add a", 5), (5, Vec::<&str>::new()));
    }

    #[test]
    fn unknown_prefix_has_no_candidates() {
        assert_eq!(keyword_candidates("x", 1), (0, Vec::<&str>::new()));
    }

    #[test]
    fn action_prompt_completes_keywords() {
        assert_eq!(helper().candidates("a", 1), (0, vec!["add"]));
    }

    #[test]
    fn field_prompts_offer_no_keywords() {
        let mut helper = helper();
        helper.set_action_prompt(false);
        assert_eq!(helper.candidates("a", 1), (1, Vec::<&str>::new()));

        helper.set_action_prompt(true);
        assert_eq!(helper.candidates("a", 1), (0, vec!["add"]));
    }
}
