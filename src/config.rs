use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keylintrc.json";

/// How a rule's findings are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warning,
    Error,
}

/// Per-rule levels, keyed by rule name (`namespace-conflict`, `invalid-value`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(default = "default_rule_level")]
    pub namespace_conflict: RuleLevel,
    #[serde(default = "default_rule_level")]
    pub invalid_value: RuleLevel,
}

impl std::fmt::Display for RuleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleLevel::Off => write!(f, "off"),
            RuleLevel::Warning => write!(f, "warning"),
            RuleLevel::Error => write!(f, "error"),
        }
    }
}

fn default_rule_level() -> RuleLevel {
    RuleLevel::Error
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            namespace_conflict: default_rule_level(),
            invalid_value: default_rule_level(),
        }
    }
}

impl RulesConfig {
    /// Parse a rules override as passed on the command line.
    ///
    /// An empty string leaves `self` unchanged. Rules missing from the
    /// override keep their level from `self`.
    pub fn merge_json(&self, json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(*self);
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "kebab-case", deny_unknown_fields)]
        struct Overrides {
            namespace_conflict: Option<RuleLevel>,
            invalid_value: Option<RuleLevel>,
        }

        let overrides: Overrides = serde_json::from_str(json)
            .with_context(|| format!("Invalid rules configuration: {}", json))?;

        Ok(Self {
            namespace_conflict: overrides
                .namespace_conflict
                .unwrap_or(self.namespace_conflict),
            invalid_value: overrides.invalid_value.unwrap_or(self.invalid_value),
        })
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing the locale files.
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub rules: RulesConfig,
}

fn default_path() -> String {
    "./locales".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: default_path(),
            ignores: Vec::new(),
            rules: RulesConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
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
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
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
