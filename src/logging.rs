//! File-backed tracing setup shared by the binary and tests. The TUI owns
//! stdout, so diagnostics always go to a log file.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;

/// Resolve the log file location: `$FORMDECK_LOG` wins, then the platform
/// data dir, then the working directory as a last resort.
#[must_use]
pub fn log_file_path() -> PathBuf {
    if let Some(path) = env::var_os("FORMDECK_LOG") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("formdeck")
        .join("formdeck.log")
}

/// Install the global subscriber writing to the log file. Returns the path
/// actually used. Calling twice is harmless; the first subscriber wins.
pub fn init_logging(level: Level) -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_lands_in_a_formdeck_directory() {
        let path = log_file_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("formdeck.log"));
    }
}
