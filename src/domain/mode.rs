//! Filter mode selection

use std::fmt;
use std::str::FromStr;

/// Direction of the filter, as passed by git in the filter driver command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Checkout: fill markers with live repository metadata
    Smudge,
    /// Commit: strip markers back to their bare form
    Clean,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Smudge => "smudge",
            FilterMode::Clean => "clean",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smudge" => Ok(FilterMode::Smudge),
            "clean" => Ok(FilterMode::Clean),
            _ => Err(format!(
                "first argument must be smudge or clean, got '{}'",
                s
            )),
        }
    }
}
