//! Interactive terminal prompt session.
//!
//! Implements the application's [`PromptSession`] port over any line
//! reader and writer. Invalid answers are re-asked here and never reach
//! the use cases.
//!
//! # User Interface
//!
//! ```text
//! Which queue driver would you like to use? [database]
//!   [0] beanstalkd
//!   [1] database
//!   [2] redis
//!   [3] sqs
//!   [4] sync
//! > 2
//! Queue [default]:
//!
//! Option                                Value
//! ------------------------------------  -----
//! Maximum Seconds Per Job               0
//! ...
//! Defaults look ok? [Y/n]
//! ```

use colored::Colorize;
use queue_setup_application::{PromptError, PromptSession};
use std::io::{self, BufRead, Stderr, StdinLock, Write};
use tracing::trace;

/// Terminal prompt session.
pub struct ConsolePromptSession<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl ConsolePromptSession<StdinLock<'static>, Stderr> {
    /// Session on the controlling terminal. Prompts are written to stderr
    /// so stdout carries nothing but the descriptor.
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConsolePromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consume the session, returning the writer (for tests).
    pub fn into_output(self) -> W {
        self.output
    }

    fn question(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn hint(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn write(&mut self, text: &str) -> Result<(), PromptError> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| PromptError::Io(format!("Failed to write prompt: {}", e)))
    }

    fn warn(&mut self, message: &str) -> Result<(), PromptError> {
        let line = if self.color {
            format!("{}\n", message.red())
        } else {
            format!("{}\n", message)
        };
        self.write(&line)
    }

    /// Print `prompt` and read one trimmed line. End of input cancels.
    fn read_answer(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.write(prompt)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PromptError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(PromptError::Cancelled);
        }

        let answer = line.trim().to_string();
        trace!(answer = %answer, "Prompt answer read");
        Ok(answer)
    }
}

impl<R: BufRead, W: Write> PromptSession for ConsolePromptSession<R, W> {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, PromptError> {
        let choices = if default { "[Y/n]" } else { "[y/N]" };
        let prompt = format!("{} {} ", self.question(question), self.hint(choices));

        loop {
            match self.read_answer(&prompt)?.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.warn("Please answer yes or no.")?,
            }
        }
    }

    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String, PromptError> {
        let default = default.filter(|d| !d.is_empty());
        let prompt = match default {
            Some(d) => format!("{} {}: ", self.question(question), self.hint(&format!("[{}]", d))),
            None => format!("{}: ", self.question(question)),
        };

        loop {
            let answer = self.read_answer(&prompt)?;
            match (answer.is_empty(), default) {
                (false, _) => return Ok(answer),
                (true, Some(d)) => return Ok(d.to_string()),
                (true, None) => self.warn("A value is required.")?,
            }
        }
    }

    fn ask_number(
        &mut self,
        question: &str,
        default: Option<u32>,
        required: bool,
    ) -> Result<Option<u32>, PromptError> {
        let shown = default.map_or_else(|| "-".to_string(), |d| d.to_string());
        let prompt = format!(
            "{} {}: ",
            self.question(question),
            self.hint(&format!("[{}]", shown))
        );

        loop {
            let answer = self.read_answer(&prompt)?;
            if answer.is_empty() {
                match default {
                    Some(d) => return Ok(Some(d)),
                    None if !required => return Ok(None),
                    None => {
                        self.warn("A value is required.")?;
                        continue;
                    }
                }
            }

            match answer.parse::<u32>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => self.warn("Please enter a whole number of zero or more.")?,
            }
        }
    }

    fn choose(
        &mut self,
        question: &str,
        options: &[&str],
        default: Option<&str>,
    ) -> Result<String, PromptError> {
        let default = default.filter(|d| options.contains(d));
        let mut menu = match default {
            Some(d) => format!("{} {}\n", self.question(question), self.hint(&format!("[{}]", d))),
            None => format!("{}\n", self.question(question)),
        };
        for (index, option) in options.iter().enumerate() {
            menu.push_str(&format!("  [{}] {}\n", index, option));
        }
        self.write(&menu)?;

        loop {
            let answer = self.read_answer("> ")?;
            if answer.is_empty() {
                match default {
                    Some(d) => return Ok(d.to_string()),
                    None => {
                        self.warn("Please choose one of the options.")?;
                        continue;
                    }
                }
            }

            let by_index = answer
                .parse::<usize>()
                .ok()
                .and_then(|index| options.get(index));
            let by_name = options.iter().find(|o| o.eq_ignore_ascii_case(&answer));

            match by_index.or(by_name) {
                Some(option) => return Ok(option.to_string()),
                None => self.warn(&format!("Value \"{}\" is invalid.", answer))?,
            }
        }
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> Result<(), PromptError> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render = |cells: Vec<&str>| -> String {
            let line = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join("  ");
            format!("{}\n", line.trim_end())
        };

        let header_line = render(headers.to_vec());
        let mut text = String::from("\n");
        if self.color {
            text.push_str(&header_line.cyan().bold().to_string());
        } else {
            text.push_str(&header_line);
        }
        let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        text.push_str(&render(separators.iter().map(String::as_str).collect()));
        for row in rows {
            text.push_str(&render(row.iter().map(String::as_str).collect()));
        }
        text.push('\n');

        self.write(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> ConsolePromptSession<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePromptSession::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
            .with_color(false)
    }

    fn output(session: ConsolePromptSession<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_confirm_default_and_explicit() {
        let mut s = session("\nn\nYES\n");
        assert!(s.confirm("Defaults look ok?", true).unwrap());
        assert!(!s.confirm("Defaults look ok?", true).unwrap());
        assert!(s.confirm("Add another?", false).unwrap());
        assert!(output(s).contains("Defaults look ok? [Y/n] "));
    }

    #[test]
    fn test_confirm_reasks_on_garbage() {
        let mut s = session("maybe\ny\n");
        assert!(s.confirm("Run Worker As Daemon", false).unwrap());
        let out = output(s);
        assert!(out.contains("Run Worker As Daemon [y/N] "));
        assert!(out.contains("Please answer yes or no."));
    }

    #[test]
    fn test_ask_uses_default_on_empty() {
        let mut s = session("\nemails\n");
        assert_eq!(s.ask("Queue", Some("default")).unwrap(), "default");
        assert_eq!(s.ask("Queue", Some("default")).unwrap(), "emails");
        assert!(output(s).contains("Queue [default]: "));
    }

    #[test]
    fn test_ask_without_default_requires_value() {
        let mut s = session("\n  \nhigh\n");
        assert_eq!(s.ask("Queue", None).unwrap(), "high");
        assert_eq!(output(s).matches("A value is required.").count(), 2);
    }

    #[test]
    fn test_ask_number_parsing() {
        let mut s = session("\n120\nabc\n-5\n15\n");
        assert_eq!(s.ask_number("Rest Seconds When Empty", Some(60), true).unwrap(), Some(60));
        assert_eq!(s.ask_number("Rest Seconds When Empty", Some(60), true).unwrap(), Some(120));
        assert_eq!(s.ask_number("Graceful Shutdown Seconds", Some(10), false).unwrap(), Some(15));
        let out = output(s);
        assert_eq!(out.matches("Please enter a whole number").count(), 2);
        assert!(out.contains("Rest Seconds When Empty [60]: "));
    }

    #[test]
    fn test_ask_number_nullable() {
        let mut s = session("\n3\n");
        assert_eq!(s.ask_number("Maximum Tries", None, false).unwrap(), None);
        assert_eq!(s.ask_number("Maximum Tries", None, false).unwrap(), Some(3));
        assert!(output(s).contains("Maximum Tries [-]: "));
    }

    #[test]
    fn test_ask_number_required_without_default_reasks() {
        let mut s = session("\n7\n");
        assert_eq!(s.ask_number("Sleep", None, true).unwrap(), Some(7));
        assert!(output(s).contains("A value is required."));
    }

    #[test]
    fn test_choose_by_default_index_and_name() {
        let options = ["beanstalkd", "database", "redis", "sqs", "sync"];
        let mut s = session("\n2\nSQS\n");
        assert_eq!(s.choose("Driver?", &options, Some("database")).unwrap(), "database");
        assert_eq!(s.choose("Driver?", &options, None).unwrap(), "redis");
        assert_eq!(s.choose("Driver?", &options, None).unwrap(), "sqs");

        let out = output(s);
        assert!(out.contains("Driver? [database]\n"));
        assert!(out.contains("  [0] beanstalkd\n"));
        assert!(out.contains("  [4] sync\n"));
    }

    #[test]
    fn test_choose_reasks_invalid_or_missing_default() {
        let options = ["redis", "sqs"];
        let mut s = session("\n9\nkafka\nredis\n");
        assert_eq!(s.choose("Driver?", &options, None).unwrap(), "redis");
        let out = output(s);
        assert!(out.contains("Please choose one of the options."));
        assert!(out.contains("Value \"9\" is invalid."));
        assert!(out.contains("Value \"kafka\" is invalid."));
    }

    #[test]
    fn test_choose_ignores_default_outside_options() {
        let options = ["redis", "sqs"];
        let mut s = session("sqs\n");
        assert_eq!(s.choose("Driver?", &options, Some("sync")).unwrap(), "sqs");
        assert!(output(s).starts_with("Driver?\n"));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut s = session("");
        assert_eq!(s.confirm("Proceed?", true).unwrap_err(), PromptError::Cancelled);
    }

    #[test]
    fn test_table_alignment() {
        let mut s = session("");
        s.table(
            &["Option", "Value"],
            &[
                vec!["Maximum Tries".to_string(), "-".to_string()],
                vec!["Run Worker As Daemon".to_string(), "No".to_string()],
            ],
        )
        .unwrap();

        let out = output(s);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "Option                Value");
        assert_eq!(lines[2], "--------------------  -----");
        assert_eq!(lines[3], "Maximum Tries         -");
        assert_eq!(lines[4], "Run Worker As Daemon  No");
    }
}
