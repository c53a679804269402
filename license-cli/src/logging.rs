//! Logging for the `license-orders` binary.
//!
//! Configured once from the `[logging]` section: one level filter over an
//! optional terminal layer on stderr and an optional append-only log file.
//! Stdout is left to command output.

use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};
use tracing::{Event, Level, Subscriber, warn};
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::LoggingSection;

// --- Formatter ---

const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

/// `<local time> <level> <file>:<line> <fields>`, colored on a terminal.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let paint = |code: &'static str| if ansi { code } else { "" };

        write!(
            writer,
            "{}{}{} {}{:>5}{} ",
            paint(DIM),
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"),
            paint(RESET),
            paint(level_color(meta.level())),
            meta.level(),
            paint(RESET),
        )?;

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
            write!(writer, "{}{file}:{line}{} ", paint(CYAN), paint(RESET))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Setup ---

/// RUST_LOG directives when given, the configured level otherwise.
fn level_filter(level: &str, rust_log: Option<String>) -> Result<EnvFilter, ParseError> {
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives),
        None => EnvFilter::try_new(level),
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    File::options().create(true).append(true).open(path)
}

/// Installs the global subscriber. Call once at startup.
///
/// A bad level falls back to `info` and a log file that cannot be opened is
/// skipped; both are reported once the subscriber is up.
pub fn init_logging(config: &LoggingSection) {
    let (filter, bad_level) = match level_filter(&config.level, std::env::var("RUST_LOG").ok()) {
        Ok(filter) => (filter, None),
        Err(error) => (EnvFilter::new("info"), Some(error)),
    };

    let (file, file_error) = match config.file.as_deref().map(open_log_file) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(error)) => (None, Some(error)),
        None => (None, None),
    };

    let console_layer = config.console.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
    });

    let file_layer = file.map(|file| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    if let Err(error) = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        warn!(%error, "logging already initialized");
        return;
    }

    if let Some(error) = bad_level {
        warn!(%error, level = %config.level, "invalid log level; using info");
    }
    if let (Some(error), Some(path)) = (file_error, &config.file) {
        warn!(%error, path = %path.display(), "file logging disabled");
    }
}
