//! Command-line surface for the FormDeck shell.

use std::path::PathBuf;

use clap::Parser;

use crate::theme::Theme;

#[derive(Debug, Parser)]
#[command(
    name = "formdeck",
    version,
    about = "Dashboard shell hosting a multi-section profile settings form"
)]
pub(crate) struct Cli {
    /// Color theme for the shell.
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Force plain ASCII glyphs.
    #[arg(long)]
    pub ascii: bool,

    /// Load the option catalog from a JSON file instead of the built-in set.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Print the active option catalog as JSON and exit.
    #[arg(long)]
    pub dump_catalog: bool,

    /// Print the timezone table and exit.
    #[arg(long)]
    pub list_timezones: bool,

    /// Log verbosity written to the log file.
    #[arg(long, default_value = "info", value_name = "LEVEL", env = "FORMDECK_LOG_LEVEL")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_the_interactive_shell() {
        let cli = Cli::parse_from(["formdeck"]);
        assert!(!cli.dump_catalog);
        assert!(!cli.list_timezones);
        assert_eq!(cli.log_level, "info");
        assert!(cli.theme.is_none());
    }

    #[test]
    fn theme_and_catalog_flags_parse() {
        let cli = Cli::parse_from(["formdeck", "--theme", "slate", "--catalog", "data.json"]);
        assert_eq!(cli.theme, Some(Theme::Slate));
        assert_eq!(cli.catalog.as_deref(), Some(std::path::Path::new("data.json")));
    }
}
