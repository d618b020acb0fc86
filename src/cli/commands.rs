//! CLI argument definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "git-keywords")]
#[command(about = "Git clean/smudge filter expanding $Keyword$ markers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Filter direction (smudge, clean)
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Path of the file being filtered, as passed by git (%f)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Git executable used for metadata queries
    #[arg(long, value_name = "PROGRAM", env = "GIT_KEYWORDS_GIT")]
    pub git: Option<String>,

    /// What to do when git cannot be launched (fatal, degrade)
    #[arg(long, value_name = "POLICY", env = "GIT_KEYWORDS_ON_TOOL_ERROR")]
    pub on_tool_error: Option<String>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE", env = "GIT_KEYWORDS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
