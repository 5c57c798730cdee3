//! Minimal stderr backend for the `log` facade.

use log::{LevelFilter, Log, Metadata, Record};
use lsgrid_shared_kernel::{PresentationError, PresentationResult};

/// Environment variable overriding the log level.
pub const LOG_ENV: &str = "LSGRID_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level().as_str().to_ascii_lowercase(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Installs the stderr logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// `Warn` by default, `Debug` with `--verbose`; an explicit `LSGRID_LOG`
/// value wins over both.
pub fn resolve_level(verbose: bool, env_value: Option<&str>) -> PresentationResult<LevelFilter> {
    if let Some(raw) = env_value.map(str::trim).filter(|v| !v.is_empty()) {
        return raw.parse::<LevelFilter>().map_err(|_| PresentationError::InvalidValue {
            flag: LOG_ENV.to_string(),
            value: raw.to_string(),
            reason: "expected one of off, error, warn, info, debug, trace".to_string(),
        });
    }
    Ok(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    })
}
