//! recent-picker binary entrypoint kept minimal. The session logic lives in the library.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use recent_picker::args::{self, Args};
use recent_picker::replay::{ScriptHost, run_script};
use recent_picker::settings::{self, logs_dir};

/// Log timestamp formatter: local time as `YYYY-MM-DD-T HH:MM:SS`.
struct PickerTimer;

impl tracing_subscriber::fmt::time::FormatTime for PickerTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer flushing until exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
/// - `to_stderr`: Skip the log file and write to stderr.
///
/// Details:
/// - Writes to `recent-picker.log` under the logs directory; falls back to
///   stderr when the file cannot be opened.
fn init_logging(level: &str, to_stderr: bool) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let stderr_logger = || {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .with_ansi(true)
            .with_writer(io::stderr)
            .with_timer(PickerTimer)
            .init();
    };
    if to_stderr {
        stderr_logger();
        return;
    }

    let mut log_path = logs_dir();
    log_path.push("recent-picker.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PickerTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so the replay still runs
            stderr_logger();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args), args.log_stderr);

    if let Some(ok) = args::process_args(&args) {
        return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let mut prefs = settings::load_settings(args.config.as_deref());
    if let Some(len) = args.recent_length {
        prefs.recent_length = len;
    }

    let mut host = ScriptHost::new(!args.no_check_files);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match args.script.as_deref() {
        Some(path) if path.as_os_str() != "-" => match File::open(path) {
            Ok(file) => run_script(&prefs, &mut host, BufReader::new(file), &mut out),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Cannot open script");
                eprintln!("cannot open {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        _ => run_script(&prefs, &mut host, io::stdin().lock(), &mut out),
    };

    match result {
        Ok(summary) => {
            tracing::info!(opened = summary.opened.len(), "recent-picker exited");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Replay failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
