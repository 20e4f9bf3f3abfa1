// crates/find_git/src/logging.rs

use flexi_logger::{DeferredNow, Logger, LoggerHandle};
use std::sync::OnceLock;

// Dropping the handle would shut the logger down.
static LOGGER_HANDLE: OnceLock<LoggerHandle> = OnceLock::new();

/// Returns the log specification for the given verbosity.
pub fn level_spec(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Starts the stderr logger. Later calls are no-ops.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if LOGGER_HANDLE.get().is_some() {
        return Ok(());
    }
    let handle = Logger::try_with_str(level_spec(verbose))?
        .format(simple_format)
        .log_to_stderr()
        .start()?;
    let _ = LOGGER_HANDLE.set(handle);
    Ok(())
}

// Format: "HH:MM:SS.fff DBG message"
pub fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let level_abbr = match record.level() {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    };
    write!(
        w,
        "{} {} {}",
        now.format("%H:%M:%S%.3f"),
        level_abbr,
        record.args()
    )
}
