//! The Executor - single entry point to the contact repository.
//!
//! The Executor owns the repository and the file exchange, routes each
//! command to its handler, and reports how long every command took.

use rolodex_core::{EventBus, LogSink};
use rolodex_storage::{ContactExchange, CsvExchange, Repository};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::config::RolodexConfig;
use crate::handlers;
use crate::{Command, Output, Result};

/// The command executor.
///
/// Commands run one at a time, to completion, in the order given.
///
/// # Example
///
/// ```ignore
/// use rolodex_executor::{Command, Executor};
///
/// let mut executor = Executor::default();
///
/// executor.execute_line("add firstname=Jo;lastname=Li")?;
/// let listed = executor.execute(Command::parse("list"))?;
///
/// // Batch execution
/// let results = executor.execute_many(vec![
///     Command::parse("find lastname=Li"),
///     Command::parse("quit"),
/// ]);
/// ```
pub struct Executor {
    repo: Repository,
    exchange: Box<dyn ContactExchange>,
}

impl Executor {
    /// Create an executor over a repository, exchanging files as CSV.
    pub fn new(repo: Repository) -> Self {
        Self {
            repo,
            exchange: Box::new(CsvExchange::new()),
        }
    }

    /// Create an executor with a repository built to `config`.
    pub fn from_config(config: &RolodexConfig) -> Self {
        Self::new(config.build_repository())
    }

    /// Replace the file format used by load and save.
    pub fn with_exchange(mut self, exchange: Box<dyn ContactExchange>) -> Self {
        self.exchange = exchange;
        self
    }

    /// The repository commands run against.
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Mutable access, for seeding outside the command protocol.
    pub fn repository_mut(&mut self) -> &mut Repository {
        &mut self.repo
    }

    /// The bus every log event is published on.
    pub fn events(&self) -> &EventBus {
        self.repo.events()
    }

    /// Register a log listener.
    pub fn subscribe(&self, sink: Arc<dyn LogSink>) {
        self.repo.subscribe(sink);
    }

    /// Execute a single command.
    ///
    /// Soft failures are logged and still return `Ok`. Only hard failures
    /// (a blank contact for add) are returned as errors.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        let started = Instant::now();
        let name = cmd.name().to_string();

        let result = self.dispatch(cmd);

        let elapsed = started.elapsed();
        debug!(
            command = %name,
            elapsed_us = elapsed.as_micros() as u64,
            ok = result.is_ok(),
            "command executed"
        );
        self.events().verbose(format!(
            "{} completed after: {} ms",
            name,
            elapsed.as_millis()
        ));
        result
    }

    /// Parse one input line, reporting it at verbose level.
    pub fn parse_line(&self, line: &str) -> Command {
        self.events().verbose(format!("input: {}", line));
        Command::parse(line)
    }

    /// Parse and execute one input line.
    pub fn execute_line(&mut self, line: &str) -> Result<Output> {
        let cmd = self.parse_line(line);
        self.execute(cmd)
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if individual commands fail.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    fn dispatch(&mut self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Add { args } => handlers::contact::add(&mut self.repo, &args),
            Command::Remove { args } => handlers::contact::remove(&mut self.repo, &args),
            Command::Find { args } => handlers::contact::find(&self.repo, &args),
            Command::List { .. } => handlers::contact::list(&self.repo),
            Command::Load { args } => {
                handlers::file::load(&mut self.repo, self.exchange.as_ref(), &args)
            }
            Command::Save { args } => {
                handlers::file::save(&self.repo, self.exchange.as_ref(), &args)
            }
            Command::Quit { .. } => Ok(Output::Quit),
            Command::Unknown { name, .. } => {
                self.events().error(format!("Unknown command: {}", name));
                Ok(Output::default())
            }
            Command::Error { args } => {
                let message = args
                    .get(crate::command::MESSAGE_FIELD)
                    .unwrap_or("Unable to parse verb.");
                self.events().error(message);
                Ok(Output::default())
            }
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::from_config(&RolodexConfig::default())
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").field("repo", &self.repo).finish()
    }
}
