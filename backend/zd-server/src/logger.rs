use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Dependencies that log every statement or connection at info/debug.
/// They never log below `warn`, whatever the configured level.
pub const CHATTY_TARGETS: &[&str] = &["sqlx", "hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    /// Append to a file, plain format
    File(PathBuf),
    ColoredStdout,
    /// Plain stdout for non-TTY (systemd, docker logs)
    PlainStdout,
}

impl LogOutput {
    /// A configured file wins over the color flag.
    pub fn select(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if colored => Self::ColoredStdout,
            None => Self::PlainStdout,
        }
    }
}

/// Level applied to [`CHATTY_TARGETS`]: never louder than `warn`, never
/// louder than the configured level.
pub fn dependency_level(level: LevelFilter) -> LevelFilter {
    level.min(LevelFilter::Warn)
}

/// Initialize the global logger.
///
/// Called once from `main`, before anything else logs. `tracing` events from
/// dependencies are bridged into the same dispatch.
pub fn initialize(
    log_level: zd_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = *log_level;
    let output = LogOutput::select(log_file, colored);

    let mut base_dispatch = Dispatch::new().level(level_filter);
    for target in CHATTY_TARGETS {
        base_dispatch = base_dispatch.level_for(*target, dependency_level(level_filter));
    }

    let dispatch = match output {
        LogOutput::File(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", log_path.display(), e),
                })?;
            Dispatch::new().format(record_format(None)).chain(file)
        }
        LogOutput::ColoredStdout => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(record_format(Some(colors)))
                .chain(std::io::stdout())
        }
        LogOutput::PlainStdout => Dispatch::new()
            .format(record_format(None))
            .chain(std::io::stdout()),
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match output {
        LogOutput::File(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        _ => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// `[rfc3339 - LEVEL] message [file:line]`
fn record_format(
    colors: Option<ColoredLevelConfig>,
) -> impl Fn(FormatCallback<'_>, &fmt::Arguments<'_>, &Record<'_>) + Sync + Send + 'static {
    move |out, message, record| {
        let date = humantime::format_rfc3339(SystemTime::now());
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);

        match colors {
            Some(colors) => out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                date,
                colors.color(record.level()),
                message,
                file,
                line
            )),
            None => out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                date,
                record.level(),
                message,
                file,
                line
            )),
        }
    }
}
