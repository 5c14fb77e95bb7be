use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::utils::fourcc_to_id;

pub const CONFIG_FILE_NAME: &str = ".mapcheckrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the map data JSON file, relative to the project root.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Root directory of the uncompiled gameplay script sources.
    #[serde(default = "default_script_root")]
    pub script_root: String,

    /// Glob patterns (relative to `script_root`) selecting script files.
    /// An empty list disables script-reference rooting.
    #[serde(default = "default_script_includes")]
    pub script_includes: Vec<String>,

    /// Glob patterns for script paths to skip (generated code, build output).
    #[serde(default)]
    pub ignores: Vec<String>,

    /// Fourcc codes of objects that are known-unreachable on purpose and
    /// must not be reported.
    #[serde(default)]
    pub allowed: Vec<String>,
}

fn default_data_file() -> String {
    "./war3map.json".to_string()
}

fn default_script_root() -> String {
    "./src".to_string()
}

fn default_script_includes() -> Vec<String> {
    vec!["**/*.cs".to_string(), "**/*.j".to_string(), "**/*.lua".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            script_root: default_script_root(),
            script_includes: default_script_includes(),
            ignores: Vec::new(),
            allowed: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns or allowlist entries
    /// that are not four-character codes.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.script_includes {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'scriptIncludes': \"{}\"", pattern)
            })?;
        }
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        for code in &self.allowed {
            if fourcc_to_id(code).is_none() {
                anyhow::bail!(
                    "Invalid entry in 'allowed': \"{}\" is not a four-character code",
                    code
                );
            }
        }
        Ok(())
    }
}

pub struct ConfigResult {
    pub config: Config,
    /// Whether the config came from a file (vs. built-in defaults).
    pub from_file: bool,
}

/// Load configuration from `dir`, falling back to defaults when no
/// config file exists.
pub fn load_config(dir: &Path) -> Result<ConfigResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(ConfigResult {
            config: Config::default(),
            from_file: false,
        });
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", CONFIG_FILE_NAME))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", CONFIG_FILE_NAME))?;

    Ok(ConfigResult {
        config,
        from_file: true,
    })
}

/// The default configuration serialized for `mapcheck init`.
pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json + "\n")
}
