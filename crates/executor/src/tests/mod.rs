//! Test modules for the executor crate.

pub mod commands;
pub mod execute_many;
pub mod file_commands;
