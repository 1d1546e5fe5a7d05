//! Contact command handlers.
//!
//! Each handler builds a contact or filter from the command's fields and
//! dispatches to the repository.

use rolodex_storage::Repository;

use crate::convert::{contact_from_args, filter_from_args};
use crate::parse::Args;
use crate::{Output, Result};

/// Handle Add command.
pub fn add(repo: &mut Repository, args: &Args) -> Result<Output> {
    let added = repo.add(contact_from_args(args))?;
    Ok(Output::Contacts(added.into_iter().collect()))
}

/// Handle Remove command.
pub fn remove(repo: &mut Repository, args: &Args) -> Result<Output> {
    let removed = repo.remove_matching(&filter_from_args(args))?;
    Ok(Output::Contacts(removed.into_iter().collect()))
}

/// Handle Find command.
pub fn find(repo: &Repository, args: &Args) -> Result<Output> {
    let filter = filter_from_args(args);
    Ok(Output::Contacts(repo.search(&filter).cloned().collect()))
}

/// Handle List command.
pub fn list(repo: &Repository) -> Result<Output> {
    Ok(Output::Contacts(repo.contacts().cloned().collect()))
}
