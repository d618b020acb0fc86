//! Configuration management

use crate::domain::Placeholders;
use crate::error::{KeywordError, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// What to do when the git executable cannot be launched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolErrorPolicy {
    /// Abort the whole run
    #[default]
    Fatal,
    /// Use the placeholder for the affected field and carry on
    Degrade,
}

impl FromStr for ToolErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fatal" => Ok(ToolErrorPolicy::Fatal),
            "degrade" => Ok(ToolErrorPolicy::Degrade),
            _ => Err(format!(
                "Invalid tool error policy: '{}'. Valid policies are: fatal, degrade",
                s
            )),
        }
    }
}

impl fmt::Display for ToolErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolErrorPolicy::Fatal => f.write_str("fatal"),
            ToolErrorPolicy::Degrade => f.write_str("degrade"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Git executable, `git` from PATH when unset
    pub git: Option<String>,
    pub on_tool_error: ToolErrorPolicy,
    pub placeholders: Placeholders,
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            KeywordError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Git executable to run
    pub fn git_program(&self) -> &str {
        self.git.as_deref().unwrap_or("git")
    }
}
