//! Logging bridge for the `log` facade.
//!
//! Records never go to stdout, so hover output stays clean for the host.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then `warn`.
//! Without either, only warnings and errors are printed to stderr. When the
//! flag or `RUST_LOG` is given, records are also written to
//! `unicode_hover_debug.log` in the system temp directory (`/tmp` on
//! Unix/macOS, `%TEMP%` on Windows).

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Level used when neither the CLI nor `RUST_LOG` sets one.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct LogBridge {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );

        if let Some(file) = &self.file {
            // Logging must never fail a query, so write errors are dropped.
            let mut file = file.lock();
            let _ = file.write_all(line.as_bytes());
        }
        eprint!("{line}");
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Install the logger. Later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let env_level = level_from_env();
    let level = resolve_level(cli_level, env_level);
    let to_file = wants_log_file(cli_level, env_level);

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        level,
        file: to_file.then(|| open_log_file(level)).flatten().map(Mutex::new),
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
    }
}

/// Path of the debug log file.
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("unicode_hover_debug.log")
}

/// CLI level wins over `RUST_LOG`, which wins over the default.
fn resolve_level(cli_level: Option<LevelFilter>, env_level: Option<LevelFilter>) -> LevelFilter {
    cli_level.or(env_level).unwrap_or(DEFAULT_LEVEL)
}

/// The debug file is only created when a level was asked for explicitly.
fn wants_log_file(cli_level: Option<LevelFilter>, env_level: Option<LevelFilter>) -> bool {
    cli_level.is_some() || env_level.is_some()
}

/// Read a bare level name (`debug`, `info`, ...) from `RUST_LOG`.
///
/// Module-scoped directives such as `unicode_hover=debug` use the level of
/// the last directive.
fn level_from_env() -> Option<LevelFilter> {
    let value = std::env::var("RUST_LOG").ok()?;
    parse_level_directive(&value)
}

fn parse_level_directive(value: &str) -> Option<LevelFilter> {
    value
        .split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next()?.trim();
            level.parse::<LevelFilter>().ok()
        })
        .last()
}

fn open_log_file(level: LevelFilter) -> Option<File> {
    if level == LevelFilter::Off {
        return None;
    }

    let log_path = log_file_path();
    match OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&log_path)
    {
        Ok(mut file) => {
            let _ = writeln!(
                file,
                "{}\nunicode-hover debug session started at {} (level={:?})\n{}",
                "=".repeat(80),
                get_timestamp(),
                level,
                "=".repeat(80)
            );
            Some(file)
        }
        // Silently fall back to stderr-only logging if the file can't be opened
        Err(_) => None,
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}
