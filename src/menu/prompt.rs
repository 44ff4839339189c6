//! Line-oriented prompts
//!
//! Reads answers from any `BufRead` and writes questions to any `Write`, so
//! the menu can be driven by a terminal or by a script.

use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

/// Asks questions and reads one-line answers
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read a trimmed line; `None` at end of input
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled answer is just
    /// a wrong answer rather than a read failure.
    pub fn ask(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Ask for a non-negative amount
    ///
    /// Text that is not a number, or a negative number, is an
    /// `InvalidAmount` error.
    pub fn ask_amount(&mut self, prompt: &str) -> LedgerResult<Option<Money>> {
        let Some(text) = self.ask(prompt)? else {
            return Ok(None);
        };
        let amount = Money::parse(&text)?;
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "'{}' is negative",
                text
            )));
        }
        Ok(Some(amount))
    }

    /// Ask a y/n question; anything but "y"/"yes" is no
    pub fn confirm(&mut self, prompt: &str) -> LedgerResult<bool> {
        Ok(self
            .ask(prompt)?
            .map(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false))
    }

    /// Write one line of output
    pub fn say(&mut self, text: impl AsRef<str>) -> LedgerResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Write text as-is
    pub fn print(&mut self, text: impl AsRef<str>) -> LedgerResult<()> {
        write!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
