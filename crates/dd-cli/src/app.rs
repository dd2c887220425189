use crate::{Cli, CliResult, Commands, logger, runner, shell};

use std::sync::Arc;

use dd_config::Config;
use dd_session::{FileStore, MemoryStore, SessionManager, SessionStore};
use log::debug;
use tokio::io::BufReader;

/// Load config, start logging, restore the session, then run the command.
pub async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(&config.logging)?;
    config.log_summary();

    let manager = build_manager(&config)?;
    manager.initialize();

    match cli.command {
        Commands::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            shell::run_lines(&manager, stdin, &mut stdout, cli.pretty).await
        }
        command => {
            let value = runner::execute(&manager, command).await?;
            println!("{}", runner::render(&value, cli.pretty)?);
            Ok(())
        }
    }
}

/// Durable scope on disk under the config directory, ephemeral scope in memory.
pub fn build_manager(config: &Config) -> CliResult<SessionManager> {
    let durable_path = config.durable_storage_path()?;
    debug!("Durable session storage: {}", durable_path.display());

    let store = SessionStore::new(
        Arc::new(FileStore::new(durable_path)),
        Arc::new(MemoryStore::new()),
    );

    Ok(SessionManager::new(config.session.clone(), store))
}
