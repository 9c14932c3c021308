use rustyline::error::ReadlineError;
use std::io;
use thiserror::Error;

/// Failures that escape the interactive session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("prompt failure: {0}")]
    Readline(#[from] ReadlineError),
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// True when the operator closed input (Ctrl-C or Ctrl-D) rather than a real fault.
    pub fn is_end_of_input(&self) -> bool {
        matches!(
            self,
            AppError::Readline(ReadlineError::Eof | ReadlineError::Interrupted)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
