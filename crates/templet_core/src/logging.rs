//! Logging bootstrap for embedding hosts.
//!
//! # Responsibility
//! - Initialize rolling file logs exactly once per process.
//! - Keep registration diagnostics as metadata-only key=value events.
//! - Capture panics as sanitized, length-capped error events.
//!
//! # Invariants
//! - Re-initialization with the same level and directory is idempotent.
//! - Conflicting re-initialization is rejected, never silently switched.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "templet";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initializes rolling file logging at `level` into `log_dir`.
///
/// # Errors
/// - Unsupported `level`, or empty/non-absolute `log_dir`.
/// - Re-initialization with a different level or directory.
/// - Logger backend setup failure.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir)?;

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, log_dir.clone()))?;
    if state.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }
    Ok(())
}

/// Returns `(level, log_dir)` when logging is active, `None` otherwise.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Returns the default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: PathBuf) -> Result<LoggingState, String> {
    std::fs::create_dir_all(&log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=logging_init module=core status=ok level={level} log_dir={} version={}",
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        log_dir,
        _logger: logger,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        // Panic payloads may carry caller-controlled text; cap and flatten
        // before writing them to the log file.
        let payload = panic_payload_summary(panic_info);
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location, payload
        );
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}
