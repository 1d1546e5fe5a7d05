//! Clap argument definition.
//!
//! The protocol itself is line-based and parsed by the executor; clap only
//! handles process flags.

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};

/// Build the CLI argument tree.
pub fn build_cli() -> Command {
    Command::new("rolodex")
        .about("Ordered in-memory contact list driven by a line protocol")
        .long_about(
            "Reads commands one per line: add, remove, find, list, load, save, quit.\n\
             Fields follow the verb as field=value pairs separated by ';', e.g.\n\
             \n    add firstname=Jo;lastname=Li;city=Springfield",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file (default: ./rolodex.toml if present)"),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .value_name("KIND")
                .value_parser(PossibleValuesParser::new(["array", "hash", "sorted"]))
                .help("Storage strategy"),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Slot count for the array backend"),
        )
        .arg(
            Arg::new("ignore-case")
                .long("ignore-case")
                .help("Order names case-insensitively")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Echo verbose events (input echo, command timings)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("load")
                .long("load")
                .value_name("FILE")
                .help("CSV file to load before reading commands"),
        )
}
