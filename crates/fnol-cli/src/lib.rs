//! Command-line front end for FNOL claim extraction and routing.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
