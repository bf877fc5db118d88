//! Logging bridge for bitmapfont-gen.
//!
//! Routes every `log::info!()` etc. from all workspace crates to stderr, so
//! stdout stays free for anything a build script might capture.
//!
//! Level precedence (highest first):
//! - `--log-level` CLI flag
//! - `RUST_LOG` environment variable (a bare level name such as `debug`)
//! - `log_level` from the config file

use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use bitmapfont_config::LogLevel;
use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{}] [{:<5}] [{}] {}",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Parse `RUST_LOG` as a single level name.
fn level_from_env() -> Option<LevelFilter> {
    let value = std::env::var("RUST_LOG").ok()?;
    match value.parse::<LogLevel>() {
        Ok(level) => Some(level.to_level_filter()),
        Err(_) => {
            eprintln!("bitmapfont-gen: ignoring unrecognised RUST_LOG value '{value}'");
            None
        }
    }
}

/// Pick the effective level from CLI, environment and config.
pub fn effective_level(
    cli_level: Option<LogLevel>,
    env_level: Option<LevelFilter>,
    config_level: LogLevel,
) -> LevelFilter {
    cli_level
        .map(LogLevel::to_level_filter)
        .or(env_level)
        .unwrap_or_else(|| config_level.to_level_filter())
}

/// Install the stderr logger. Later calls are no-ops.
pub fn init_log_bridge(cli_level: Option<LogLevel>, config_level: LogLevel) {
    let level = effective_level(cli_level, level_from_env(), config_level);
    let logger = LOGGER.get_or_init(|| StderrLogger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}
