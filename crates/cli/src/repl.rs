//! Read loops.
//!
//! Interactive mode: rustyline prompt with history and TAB completion.
//! Pipe mode: read lines from any `BufRead`, execute each.
//!
//! Both stop at `quit` or end of input.

use std::io::{self, BufRead, Write};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::warn;

use rolodex_executor::{ContactField, Verb, FILE_FIELD};

use crate::state::{Flow, Session};

/// Line loop over an arbitrary reader and writer.
pub struct Repl<R, W> {
    input: R,
    output: W,
    prompt: Option<String>,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Loop without a prompt.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: None,
        }
    }

    /// Print `prompt` before reading each line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.output, "{}", prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\n', '\r']);

            if session.handle_line(line, &mut self.output)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(session: &mut Session, prompt: &str) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    pipe(stdin.lock(), stdout.lock(), session, prompt)
}

fn pipe<R: BufRead, W: Write>(
    input: R,
    output: W,
    session: &mut Session,
    prompt: &str,
) -> io::Result<()> {
    Repl::new(input, output).with_prompt(prompt).run(session)
}

/// Run the interactive REPL.
pub fn run_repl(session: &mut Session, prompt: &str) -> io::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<RolodexHelper, _> = Editor::with_config(config)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    rl.set_helper(Some(RolodexHelper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    let stdout = io::stdout();
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if session.handle_line(&line, &mut stdout.lock())? == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                break;
            }
            Err(err) => {
                warn!(error = %err, "readline failed");
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
    Ok(())
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.rolodex_history", h))
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Field names offered after a verb, with the `=` already typed.
fn fields_for(verb: Verb) -> Vec<String> {
    match verb {
        Verb::Add | Verb::Remove | Verb::Find => ContactField::ALL
            .iter()
            .map(|f| format!("{}=", f.key()))
            .collect(),
        Verb::Load | Verb::Save => vec![format!("{}=", FILE_FIELD)],
        _ => Vec::new(),
    }
}

fn pairs<I: IntoIterator<Item = String>>(words: I) -> Vec<Pair> {
    words
        .into_iter()
        .map(|w| Pair {
            display: w.clone(),
            replacement: w,
        })
        .collect()
}

struct RolodexHelper;

impl Helper for RolodexHelper {}
impl Validator for RolodexHelper {}
impl Highlighter for RolodexHelper {}
impl Hinter for RolodexHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for RolodexHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_line(&line[..pos]))
    }
}

/// Completion start offset and candidates for the text left of the cursor.
fn complete_line(line_to_pos: &str) -> (usize, Vec<Pair>) {
    let pos = line_to_pos.len();
    let trimmed = line_to_pos.trim_start();

    // Still typing the verb
    if !trimmed.contains(|c: char| c.is_whitespace()) {
        let start = pos - trimmed.len();
        let verbs = Verb::KNOWN
            .iter()
            .map(|v| v.as_str())
            .filter(|v| v.starts_with(trimmed))
            .map(str::to_string);
        return (start, pairs(verbs));
    }

    // Completing a field name: the text after the last space or ';'
    let verb = Verb::from_token(trimmed.split_whitespace().next().unwrap_or(""));
    let word_start = line_to_pos
        .rfind(|c: char| c.is_whitespace() || c == ';')
        .map_or(0, |i| i + 1);
    let partial = &line_to_pos[word_start..];
    if partial.contains('=') {
        return (pos, Vec::new());
    }
    let fields = fields_for(verb)
        .into_iter()
        .filter(|f| f.starts_with(&partial.to_lowercase()));
    (word_start, pairs(fields))
}
