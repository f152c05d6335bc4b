//! Shell configuration assembly so CLI flags and the config file resolve
//! consistently. Flags win over the file; the file wins over defaults.

mod cli;
mod file;

pub(crate) use cli::Cli;

use anyhow::Result;
use tracing::Level;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ShellConfig {
    pub theme: Theme,
    pub ascii: bool,
    pub log_level: Level,
}

impl ShellConfig {
    pub(crate) fn resolve(cli: &Cli) -> Result<Self> {
        let file = file::FileConfig::load()?;
        let theme = cli
            .theme
            .or_else(|| file.theme.as_deref().and_then(Theme::from_name))
            .unwrap_or(Theme::Meadow);
        let ascii = cli.ascii || file.ascii.unwrap_or(false);
        let log_level = parse_level(&cli.log_level).unwrap_or(Level::INFO);
        Ok(Self {
            theme,
            ascii,
            log_level,
        })
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
