use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dd")]
#[command(about = "Demand Dashboard session CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

/// One line typed into `dd shell`: the same commands without the binary name.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
pub(crate) struct ShellLine {
    #[command(subcommand)]
    pub(crate) command: Commands,
}
