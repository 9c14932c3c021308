#![allow(dead_code)]

use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::io::Cursor;
use usersapp::control::LineEditor;

/// Line editor that replays canned answers and records every prompt shown.
pub struct ScriptedEditor {
    responses: VecDeque<Result<String, ReadlineError>>,
    pub prompts: Vec<String>,
    pub history: Vec<String>,
}

impl ScriptedEditor {
    pub fn new(responses: Vec<Result<String, ReadlineError>>) -> Self {
        Self {
            responses: responses.into(),
            prompts: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Script built from plain answers, followed by end of input.
    pub fn answers(answers: &[&str]) -> Self {
        Self::new(answers.iter().map(|a| Ok(a.to_string())).collect())
    }
}

impl LineEditor for ScriptedEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.prompts.push(prompt.to_string());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(ReadlineError::Eof))
    }

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool> {
        self.history.push(entry.to_string());
        Ok(true)
    }
}

pub fn output(sink: &Cursor<Vec<u8>>) -> String {
    String::from_utf8(sink.get_ref().clone()).unwrap()
}
