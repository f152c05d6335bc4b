//! Optional on-disk preferences (config.toml); absence is not an error.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub ascii: Option<bool>,
}

fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("FORMDECK_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("formdeck").join("config.toml"))
}

impl FileConfig {
    pub(crate) fn load() -> Result<Self> {
        let Some(path) = config_file_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys_and_ignores_the_rest() {
        let cfg: FileConfig = toml::from_str("theme = \"mono\"\nascii = true\n").expect("parse");
        assert_eq!(cfg.theme.as_deref(), Some("mono"));
        assert_eq!(cfg.ascii, Some(true));

        let empty: FileConfig = toml::from_str("").expect("parse empty");
        assert!(empty.theme.is_none());
        assert!(empty.ascii.is_none());
    }
}
