//! Rolodex CLI: line-protocol shell over the contact repository.
//!
//! Two modes:
//! - **REPL mode**: `rolodex [flags]` with an interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `cat script.txt | rolodex` reads line-by-line from stdin

mod commands;
mod format;
mod repl;
mod state;

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rolodex_executor::{
    Args, BackendKind, CaseSensitivity, Command, Executor, RolodexConfig, TracingSink,
    CONFIG_FILE_NAME, FILE_FIELD,
};

use commands::build_cli;
use format::OutputMode;
use state::Session;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };
    tracing::debug!(?config, "configuration resolved");

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let executor = Executor::from_config(&config);
    executor.subscribe(Arc::new(TracingSink));
    let mut session = Session::new(executor, output_mode, config.echo_verbose);

    if let Some(file) = matches.get_one::<String>("load") {
        let mut stdout = io::stdout();
        if let Err(e) = session.handle_command(load_command(file), &mut stdout) {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    }

    let result = if io::stdin().is_terminal() {
        repl::run_repl(&mut session, &config.prompt)
    } else {
        repl::run_pipe(&mut session, &config.prompt)
    };

    if let Err(e) = result.and_then(|()| io::stdout().flush()) {
        eprintln!("(error) {}", e);
        process::exit(1);
    }
}

/// Diagnostics go to stderr so they never mix with the transcript.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// `load` for a path given on the command line, which may contain `;`.
fn load_command(file: &str) -> Command {
    Command::Load {
        args: Args::new().with(FILE_FIELD, file),
    }
}

/// Config file (explicit, or `./rolodex.toml` if present), then flag overrides.
fn load_config(matches: &clap::ArgMatches) -> Result<RolodexConfig, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RolodexConfig::from_file(Path::new(path)).map_err(|e| e.to_string())?,
        None if Path::new(CONFIG_FILE_NAME).is_file() => {
            RolodexConfig::from_file(Path::new(CONFIG_FILE_NAME)).map_err(|e| e.to_string())?
        }
        None => RolodexConfig::default(),
    };

    if let Some(kind) = matches.get_one::<String>("backend") {
        config.backend = kind.parse::<BackendKind>().map_err(|e| e.to_string())?;
    }
    if let Some(capacity) = matches.get_one::<usize>("capacity") {
        config.capacity = *capacity;
    }
    if matches.get_flag("ignore-case") {
        config.ordering = CaseSensitivity::IgnoreCase;
    }
    if matches.get_flag("verbose") {
        config.echo_verbose = true;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn matches(args: &[&str]) -> clap::ArgMatches {
        let mut argv = vec!["rolodex"];
        argv.extend_from_slice(args);
        build_cli().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "backend = \"hash\"\ncapacity = 7\n").unwrap();
        let path = path.display().to_string();

        let config = load_config(&matches(&[
            "--config",
            &path,
            "--backend",
            "array",
            "--ignore-case",
            "--verbose",
        ]))
        .unwrap();

        assert_eq!(config.backend, BackendKind::Array);
        assert_eq!(config.capacity, 7);
        assert_eq!(config.ordering, CaseSensitivity::IgnoreCase);
        assert!(config.echo_verbose);
    }

    #[test]
    fn test_load_flag_keeps_whole_path() {
        let cmd = load_command("/tmp/a;b=c.csv");
        assert_eq!(cmd.args().get(FILE_FIELD), Some("/tmp/a;b=c.csv"));
        assert!(matches!(cmd, Command::Load { .. }));
    }

    #[test]
    fn test_bad_config_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "backend = 3").unwrap();
        let path = path.display().to_string();
        assert!(load_config(&matches(&["--config", &path])).is_err());
    }
}
