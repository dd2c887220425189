use crate::{CliError, CliResult};

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::time::SystemTime;

use dd_config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, debug};

/// Install the global fern logger described by `config`.
///
/// Lines go to `config.file` when set, otherwise to stderr so command results
/// on stdout stay machine-readable. Colors apply to stderr only.
pub fn initialize(config: &LoggingConfig) -> CliResult<()> {
    let level_filter = *config.level;
    let colors = (config.colored && config.file.is_none()).then(level_colors);

    let dispatch = Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| write_line(out, message, record, colors.as_ref()));

    let dispatch = match config.file.as_deref() {
        Some(path) => dispatch.chain(open_log_file(Path::new(path))?),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    debug!(
        "Logger initialized: level={}, output={}",
        level_filter,
        config.file.as_deref().unwrap_or("stderr")
    );

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn write_line(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    colors: Option<&ColoredLevelConfig>,
) {
    let date = humantime::format_rfc3339(SystemTime::now());
    let file = record.file().unwrap_or("unknown");
    let line = record.line().unwrap_or(0);

    match colors {
        Some(colors) => out.finish(format_args!(
            "[{date} - {}] {message} [{file}:{line}]",
            colors.color(record.level())
        )),
        None => out.finish(format_args!(
            "[{date} - {}] {message} [{file}:{line}]",
            record.level()
        )),
    }
}

fn open_log_file(path: &Path) -> CliResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            CliError::logger(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })
}
