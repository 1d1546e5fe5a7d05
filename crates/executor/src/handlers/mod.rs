//! Command handlers organized by concern.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `contact` | add, remove, find, list |
//! | `file` | load, save |
//!
//! Quit, unknown and error commands are handled inline by the executor.

pub mod contact;
pub mod file;
