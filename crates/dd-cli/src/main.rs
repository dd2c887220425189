//! dd - Demand Dashboard session CLI
//!
//! Drives the session manager from the command line. Remembered sign-ins
//! are kept in `<config_dir>/session.json`; anything else lasts only for the
//! current process, so use `dd shell` to keep an ephemeral session around.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and stay signed in across runs
//! dd sign-in --email jane.doe@co.com --password secret1 --remember
//!
//! # Who is signed in?
//! dd whoami --pretty
//!
//! # Interactive session
//! dd shell
//! ```

use dd_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match dd_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
