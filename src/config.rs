//! Configuration file loading and parsing.
//!
//! Configuration is optional: a `.sheetlocrc.json` next to the source file
//! (or in any parent directory up to the repository root) can pin the
//! worksheet to read and the placeholder token substituted into destination
//! templates. CLI flags override file values.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".sheetlocrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Worksheet to read. Defaults to the first sheet of the workbook.
    #[serde(default)]
    pub sheet: Option<String>,
    /// Token replaced with the language code in destination templates.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "{lang}".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: None,
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            bail!("\"placeholder\" must not be empty");
        }
        if let Some(sheet) = &self.sheet
            && sheet.trim().is_empty()
        {
            bail!("\"sheet\" must not be blank");
        }
        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
