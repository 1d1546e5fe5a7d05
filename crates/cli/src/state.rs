//! Session wrapper around the executor.
//!
//! Holds the executor, a console listener on its event bus, and the output
//! mode. One call to [`Session::handle_line`] runs one protocol line and
//! writes its transcript: echoed log messages first, then any listing.

use std::io::{self, Write};
use std::sync::Arc;

use rolodex_executor::{Command, Executor, LogLevel, RecordingSink};

use crate::format::{format_error, format_event, format_output, OutputMode};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive or piped session.
pub struct Session {
    executor: Executor,
    console: Arc<RecordingSink>,
    mode: OutputMode,
    echo_verbose: bool,
}

impl Session {
    /// Create a session and attach the console listener.
    pub fn new(executor: Executor, mode: OutputMode, echo_verbose: bool) -> Self {
        let console = Arc::new(RecordingSink::new());
        executor.subscribe(console.clone());
        Self {
            executor,
            console,
            mode,
            echo_verbose,
        }
    }

    /// Underlying executor.
    #[allow(dead_code)]
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Run one line and write its transcript to `out`.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let cmd = self.executor.parse_line(line);
        self.handle_command(cmd, out)
    }

    /// Run an already-built command and write its transcript to `out`.
    pub fn handle_command(&mut self, cmd: Command, out: &mut impl Write) -> io::Result<Flow> {
        let verb = cmd.verb();
        let result = self.executor.execute(cmd);

        self.echo_events(out)?;

        match result {
            Ok(output) if output.is_quit() => {
                out.flush()?;
                return Ok(Flow::Quit);
            }
            Ok(output) if verb.is_listing() => {
                let formatted = format_output(&output, self.mode);
                if !formatted.is_empty() {
                    writeln!(out, "{}", formatted)?;
                }
            }
            Ok(_) => {}
            Err(e) => writeln!(out, "{}", format_error(&e, self.mode))?,
        }

        out.flush()?;
        Ok(Flow::Continue)
    }

    fn echo_events(&self, out: &mut impl Write) -> io::Result<()> {
        for event in self.console.drain() {
            if event.level == LogLevel::Verbose && !self.echo_verbose {
                continue;
            }
            writeln!(out, "{}", format_event(&event, self.mode))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_executor::{Args, FILE_FIELD};

    fn session() -> Session {
        Session::new(Executor::default(), OutputMode::Human, false)
    }

    fn transcript(session: &mut Session, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = session.handle_line(line, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_add_then_list_prints_one_record() {
        let mut s = session();
        let (_, added) = transcript(
            &mut s,
            "add firstname=Jo;lastname=Li;street=1 Oak;city=X;state=Y;zip=1",
        );
        assert_eq!(
            added,
            "Add: adding new contact with ID 1 (Jo Li)\nAdd: complete (1)\n"
        );

        let (flow, listed) = transcript(&mut s, "list");
        assert_eq!(flow, Flow::Continue);
        let lines: Vec<_> = listed.lines().collect();
        assert_eq!(lines.len(), 1);
        for part in ["1", "Jo", "Li", "1 Oak", "X", "Y"] {
            assert!(lines[0].contains(part), "{:?} missing {}", lines[0], part);
        }
    }

    #[test]
    fn test_non_listing_verbs_print_no_records() {
        let mut s = session();
        transcript(&mut s, "add lastname=a");
        let (_, removed) = transcript(&mut s, "remove lastname=a");
        assert_eq!(removed, "Remove: removed contact 1 ( a)\n");
    }

    #[test]
    fn test_unparseable_line_reports_and_continues() {
        let mut s = session();
        transcript(&mut s, "add lastname=a");
        let (flow, text) = transcript(&mut s, ";;;");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(text, "Unable to parse verb. (;;;)\n");
        assert_eq!(s.executor().repository().len(), 1);
    }

    #[test]
    fn test_bogus_verb_reports_and_continues() {
        let mut s = session();
        let (flow, text) = transcript(&mut s, "bogus;;;");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(text, "Unknown command: bogus\n");
        assert!(s.executor().repository().is_empty());
    }

    #[test]
    fn test_hard_failure_printed_as_error() {
        let mut s = session();
        let (flow, text) = transcript(&mut s, "add");
        assert_eq!(flow, Flow::Continue);
        assert!(text.ends_with("(error) invalid input: contact to add has no fields set\n"));
    }

    #[test]
    fn test_quit_stops() {
        let mut s = session();
        let (flow, text) = transcript(&mut s, "quit");
        assert_eq!(flow, Flow::Quit);
        assert!(text.is_empty());
    }

    #[test]
    fn test_verbose_echo() {
        let mut s = Session::new(Executor::default(), OutputMode::Human, true);
        let (_, text) = transcript(&mut s, "list");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "input: list");
        assert!(lines[1].starts_with("list completed after: "));
    }

    #[test]
    fn test_load_command_with_semicolon_in_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a;b.csv");
        std::fs::write(&path, "firstname,lastname\nJo,Li\n").unwrap();
        let file = path.display().to_string();

        let mut s = session();
        let cmd = Command::Load {
            args: Args::new().with(FILE_FIELD, file.as_str()),
        };
        let flow = s.handle_command(cmd, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(s.executor().repository().len(), 1);
    }

    #[test]
    fn test_json_mode_listing() {
        let mut s = Session::new(Executor::default(), OutputMode::Json, false);
        transcript(&mut s, "add firstname=Jo;lastname=Li");
        let (_, text) = transcript(&mut s, "find lastname=Li");
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["Contacts"][0]["last_name"], "Li");
    }
}
