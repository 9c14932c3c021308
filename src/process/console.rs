use crossterm::style::Stylize;
use std::io::{self, Write};

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVariant {
    Info,
    Success,
    Error,
}

impl MessageVariant {
    fn symbol(self) -> &'static str {
        match self {
            MessageVariant::Info => "ℹ",
            MessageVariant::Success => "✔",
            MessageVariant::Error => "✖",
        }
    }
}

/// Output sink for the session: plain lines plus colorized status lines.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    color: bool,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, color: bool) -> Self {
        Self { out, color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Write a line verbatim.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Write a single status line, e.g. `✔ User deleted!`.
    pub fn status(&mut self, variant: MessageVariant, text: &str) -> io::Result<()> {
        let symbol = variant.symbol();
        if !self.color {
            return writeln!(self.out, "{symbol} {text}");
        }

        let styled = match variant {
            MessageVariant::Info => symbol.cyan(),
            MessageVariant::Success => symbol.green(),
            MessageVariant::Error => symbol.red(),
        };
        writeln!(self.out, "{styled} {text}")
    }

    pub fn info(&mut self, text: &str) -> io::Result<()> {
        self.status(MessageVariant::Info, text)
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.status(MessageVariant::Success, text)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.status(MessageVariant::Error, text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
