use crate::control::LineEditor;
use crate::error::AppResult;

/// Question asked at the top of every loop iteration.
pub const ACTION_QUESTION: &str = "How can I help you?";

/// Ask one question and return the raw answer.
pub fn ask(editor: &mut dyn LineEditor, question: &str) -> AppResult<String> {
    Ok(editor.readline(&format_prompt(question))?)
}

/// Render a question the way every prompt in the session is shown.
pub fn format_prompt(question: &str) -> String {
    format!("? {question} ")
}

/// Whether `prompt` is the top-level action prompt rather than a field prompt.
pub fn is_action_prompt(prompt: &str) -> bool {
    prompt == format_prompt(ACTION_QUESTION)
}
