//! dd-cli library
//!
//! Exposes the command grammar and the runner so they can be tested without
//! spawning the binary.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod runner;
pub(crate) mod shell;
pub(crate) mod shell_words;

#[cfg(test)]
mod tests;

pub use app::run;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliResult};
