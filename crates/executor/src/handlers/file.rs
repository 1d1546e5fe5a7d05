//! Bulk file command handlers.
//!
//! Every failure here is soft: it is logged at error level on the repository's
//! bus and the command returns normally without touching the collection.

use rolodex_storage::{ContactExchange, Repository};
use std::path::Path;

use crate::command::FILE_FIELD;
use crate::parse::Args;
use crate::{Output, Result};

fn file_arg(args: &Args) -> Option<&Path> {
    args.get(FILE_FIELD)
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(Path::new)
}

/// Handle Load command.
pub fn load(repo: &mut Repository, exchange: &dyn ContactExchange, args: &Args) -> Result<Output> {
    let Some(path) = file_arg(args) else {
        repo.events().error(
            "Load command requires a 'file' argument with the path to an existing CSV file.",
        );
        return Ok(Output::default());
    };

    if !path.is_file() {
        repo.events()
            .error("Load command 'file' argument must refer to an existing CSV file.");
        return Ok(Output::default());
    }

    let contacts = match exchange.read_path(path) {
        Ok(contacts) => contacts,
        Err(e) => {
            repo.events()
                .error(format!("Load: reading '{}' failed: {}", path.display(), e));
            return Ok(Output::default());
        }
    };

    let loaded = repo.load(contacts)?.cloned().collect();
    Ok(Output::Contacts(loaded))
}

/// Handle Save command.
pub fn save(repo: &Repository, exchange: &dyn ContactExchange, args: &Args) -> Result<Output> {
    let Some(path) = file_arg(args) else {
        repo.events().error(
            "Save command requires a 'file' argument with the path to a new or existing CSV file.",
        );
        return Ok(Output::Unit);
    };

    match exchange.write_path(path, repo.contacts()) {
        Ok(()) => repo
            .events()
            .info(format!("Saved {} contacts to {}", repo.len(), path.display())),
        Err(e) => repo
            .events()
            .error(format!("Save: writing '{}' failed: {}", path.display(), e)),
    }
    Ok(Output::Unit)
}
