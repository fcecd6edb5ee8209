//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

/// recent-picker - replay editor sessions through the recent files picker
#[derive(Parser, Debug)]
#[command(name = "recent-picker")]
#[command(version)]
#[command(about = "Replay editor events through a bounded recent-files picker", long_about = None)]
pub struct Args {
    /// Event script (JSON lines); reads stdin when omitted or `-`
    pub script: Option<PathBuf>,

    /// Settings file to use instead of ~/.config/recent-picker/settings.conf
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of recent files offered by the picker
    #[arg(long)]
    pub recent_length: Option<usize>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log to stderr instead of the log file
    #[arg(long)]
    pub log_stderr: bool,

    /// Do not check that picked files exist before opening them
    #[arg(long)]
    pub no_check_files: bool,

    /// Write a commented default settings.conf and exit
    #[arg(long)]
    pub write_default_config: bool,
}

/// What: Handle flags that exit before any script is replayed.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Some(exit_ok)` when an early-exit flag was handled, `None` otherwise.
pub fn process_args(args: &Args) -> Option<bool> {
    if args.write_default_config {
        let path = args
            .config
            .clone()
            .unwrap_or_else(crate::settings::default_settings_path);
        return Some(match crate::settings::write_default_settings(&path) {
            Ok(written) => {
                if written {
                    println!("wrote {}", path.display());
                } else {
                    println!("{} already exists", path.display());
                }
                true
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to write settings");
                eprintln!("failed to write {}: {e}", path.display());
                false
            }
        });
    }
    None
}
