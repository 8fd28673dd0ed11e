//! Line-oriented prompting
//!
//! `Prompter` wraps any input/output pair so the interactive flows run the
//! same against a real terminal and against in-memory buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{BudgetError, BudgetResult};

/// Reads answers from `input` and writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output stream
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line
    pub fn say(&mut self, message: impl Display) -> BudgetResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print `prompt` and read one line, trimmed
    ///
    /// Fails with [`BudgetError::InputClosed`] once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> BudgetResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(BudgetError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    ///
    /// Validation failures are shown to the user and the question is repeated.
    /// Any other error is returned.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> BudgetResult<T>
    where
        F: FnMut(&str) -> BudgetResult<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_validation() => self.say(&err)?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Ask a yes/no question until answered with y, yes, n or no
    pub fn ask_yes_no(&mut self, prompt: &str) -> BudgetResult<bool> {
        self.ask_until(prompt, parse_yes_no)
    }
}

/// Parse a yes/no answer, case-insensitively
pub fn parse_yes_no(answer: &str) -> BudgetResult<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(BudgetError::validation("Please enter 'yes' or 'no'.")),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{prompter, transcript};
    use super::*;

    #[test]
    fn test_ask_trims_answer() {
        let mut p = prompter(&["  hello  "]);
        assert_eq!(p.ask("Say: ").unwrap(), "hello");
        assert_eq!(transcript(p), "Say: ");
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut p = Prompter::new(std::io::Cursor::new(Vec::new()), Vec::new());
        assert!(p.ask("Say: ").unwrap_err().is_input_closed());
    }

    #[test]
    fn test_ask_until_reprompts_on_validation_error() {
        let mut p = prompter(&["x", "-1", "7"]);
        let value = p
            .ask_until("Number: ", |raw| {
                let n: i64 = raw
                    .parse()
                    .map_err(|_| BudgetError::validation("Please enter a valid number."))?;
                if n < 0 {
                    return Err(BudgetError::validation("Can not be negative"));
                }
                Ok(n)
            })
            .unwrap();

        assert_eq!(value, 7);
        let out = transcript(p);
        assert_eq!(out.matches("Number: ").count(), 3);
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("Can not be negative"));
    }

    #[test]
    fn test_ask_until_propagates_other_errors() {
        let mut p = prompter(&["anything"]);
        let err = p
            .ask_until("Q: ", |_| -> BudgetResult<()> {
                Err(BudgetError::Storage("disk full".into()))
            })
            .unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
    }

    #[test]
    fn test_yes_no() {
        assert!(parse_yes_no("YES").unwrap());
        assert!(parse_yes_no("y").unwrap());
        assert!(!parse_yes_no(" No ").unwrap());
        assert!(parse_yes_no("maybe").is_err());

        let mut p = prompter(&["maybe", "n"]);
        assert!(!p.ask_yes_no("Continue? ").unwrap());
        assert!(transcript(p).contains("Please enter 'yes' or 'no'."));
    }
}
