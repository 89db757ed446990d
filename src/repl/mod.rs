//! Line-oriented help shell
//!
//! Reads one command per line and writes plain text. Failures are printed
//! as `error: ...` and never end the session. Terminals get a `rustyline`
//! editor with history; piped input is read line by line.

use std::io::{BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{HelpError, HelpResult};
use crate::help::{FunOptions, HelpDesk};
use crate::types::HelpQuery;

const PROMPT: &str = "help> ";

const USAGE: &str = "\
Commands:
  man <query>          documentation for a topic
  fun <query> [--all]  operations for a topic (--all adds peripheral ones)
  topics               list every topic and its synonyms
  help                 show this message
  quit, exit           leave

A query is a topic keyword (`strings`, `io`) or a value written as
source text (`1//2`, `[1, 2]`, `Dict(:a => 1)`, `::Int64`).
";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Man(HelpQuery),
    Fun(HelpQuery, FunOptions),
    Topics,
    Help,
    Quit,
    Empty,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Ok(Command::Empty),
            "topics" => Ok(Command::Topics),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "man" => require_query("man", rest).map(|q| Command::Man(HelpQuery::parse(q))),
            "fun" => {
                let (query, extended_scope) = match rest.strip_suffix("--all") {
                    Some(query) => (query.trim_end(), true),
                    None => (rest, false),
                };
                require_query("fun", query)
                    .map(|q| Command::Fun(HelpQuery::parse(q), FunOptions { extended_scope }))
            }
            other => Err(format!("unknown command `{}` (type `help` for commands)", other)),
        }
    }
}

fn require_query<'a>(command: &str, query: &'a str) -> Result<&'a str, String> {
    if query.is_empty() {
        Err(format!("`{}` needs a topic or a value", command))
    } else {
        Ok(query)
    }
}

/// Interactive shell writing to any sink
pub struct Repl<'a, W> {
    desk: &'a HelpDesk,
    output: W,
    prompt: bool,
}

impl<'a, W: Write> Repl<'a, W> {
    pub fn new(desk: &'a HelpDesk, output: W) -> Self {
        Self {
            desk,
            output,
            prompt: true,
        }
    }

    /// Disable the prompt (for piped input)
    pub fn without_prompt(mut self) -> Self {
        self.prompt = false;
        self
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, mut input: R) -> HelpResult<()> {
        let mut line = String::new();
        loop {
            if self.prompt {
                write!(self.output, "{}", PROMPT)?;
                self.output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if !self.handle_line(&line)? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Terminal session with line editing and history
    pub fn run_editor(&mut self) -> HelpResult<()> {
        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.trim());
                    }
                    if !self.handle_line(&line)? {
                        break;
                    }
                }
                // ^C clears the line, ^D leaves
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Handle one input line. Returns `false` once the user asks to quit.
    pub fn handle_line(&mut self, line: &str) -> HelpResult<bool> {
        match Command::parse(line) {
            Ok(Command::Quit) => return Ok(false),
            Ok(command) => self.execute(command)?,
            Err(message) => writeln!(self.output, "error: {}", message)?,
        }
        self.output.flush()?;
        Ok(true)
    }

    /// Execute one command, reporting lookup failures to the output
    pub fn execute(&mut self, command: Command) -> HelpResult<()> {
        log::debug!("repl command: {:?}", command);
        let outcome = match command {
            Command::Man(query) => self.man(&query),
            Command::Fun(query, options) => self.desk.fun_to(&query, options, &mut self.output),
            Command::Topics => {
                let text = self.desk.render_topics();
                self.output.write_all(text.as_bytes()).map_err(Into::into)
            }
            Command::Help => self.output.write_all(USAGE.as_bytes()).map_err(Into::into),
            Command::Quit | Command::Empty => Ok(()),
        };

        match outcome {
            Err(e @ HelpError::Io(_)) => Err(e),
            Err(e) => {
                writeln!(self.output, "error: {}", e)?;
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    fn man(&mut self, query: &HelpQuery) -> HelpResult<()> {
        let record = self.desk.man(query)?;
        if let Some(notice) = &record.notice {
            writeln!(self.output, "note: {}", notice)?;
        }
        writeln!(self.output, "{}", record.render())?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HelpConfig;
    use crate::types::HelpValue;
    use std::io::Cursor;

    fn session(input: &str) -> String {
        let desk = HelpDesk::with_config(&HelpConfig::default()).unwrap();
        let mut repl = Repl::new(&desk, Vec::new()).without_prompt();
        repl.run(Cursor::new(input.to_string())).unwrap();
        String::from_utf8(repl.into_output()).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("  "), Ok(Command::Empty));
        assert_eq!(Command::parse("topics"), Ok(Command::Topics));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert_eq!(
            Command::parse("man io"),
            Ok(Command::Man(HelpQuery::keyword("io")))
        );
        assert_eq!(
            Command::parse("fun 1//2 --all"),
            Ok(Command::Fun(
                HelpQuery::Value(HelpValue::Rational(1, 2)),
                FunOptions { extended_scope: true }
            ))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("man").unwrap_err().contains("needs a topic"));
        assert!(Command::parse("fun --all").unwrap_err().contains("needs a topic"));
        assert!(Command::parse("frob x").unwrap_err().contains("unknown command"));
    }

    #[test]
    fn test_session_continues_after_error() {
        let out = session("man xyz-not-a-topic\nman reserved\nquit\nman io\n");
        assert!(out.starts_with("error: unknown help topic `xyz-not-a-topic`"));
        assert!(out.contains("baremodule"));
        // nothing after quit is executed
        assert!(!out.contains("open("));
    }

    #[test]
    fn test_fun_prints_notice_then_listing() {
        let out = session("fun dictionry\n");
        assert!(out.starts_with("note: "));
        assert!(out.contains("haskey"));
    }

    #[test]
    fn test_handle_line_reports_quit() {
        let desk = HelpDesk::with_config(&HelpConfig::default()).unwrap();
        let mut repl = Repl::new(&desk, Vec::new());
        assert!(repl.handle_line("topics").unwrap());
        assert!(repl.handle_line("bogus").unwrap());
        assert!(!repl.handle_line("quit").unwrap());
        let out = String::from_utf8(repl.into_output()).unwrap();
        assert!(out.contains("rationals"));
        assert!(out.contains("error: unknown command `bogus`"));
    }

    #[test]
    fn test_prompt_is_written() {
        let desk = HelpDesk::with_config(&HelpConfig::default()).unwrap();
        let mut repl = Repl::new(&desk, Vec::new());
        repl.run(Cursor::new("help\n")).unwrap();
        let out = String::from_utf8(repl.into_output()).unwrap();
        assert!(out.starts_with(PROMPT));
        assert!(out.contains("Commands:"));
    }
}
