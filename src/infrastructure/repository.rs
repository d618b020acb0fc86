//! Read-only repository queries backed by the git command line

use crate::error::{KeywordError, Result};
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Abstract read-only view of the version control history for one file.
///
/// Every method distinguishes three outcomes:
/// - `Ok(Some(_))`: the query answered
/// - `Ok(None)`: the query ran but failed, the caller falls back to a placeholder
/// - `Err(_)`: the underlying tool could not be launched at all
pub trait RepositoryQuery {
    /// Name of the currently checked out branch
    fn branch(&self) -> Result<Option<String>>;

    /// Number of commits touching `path`
    fn revision_count(&self, path: &str) -> Result<Option<usize>>;

    /// `Name - <email>` of the last commit touching `path`
    fn last_author(&self, path: &str) -> Result<Option<String>>;

    /// Commit date of the last commit touching `path`
    fn last_date(&self, path: &str) -> Result<Option<String>>;

    /// Full id of the last commit touching `path`
    fn last_id(&self, path: &str) -> Result<Option<String>>;

    /// Subject line of the last commit touching `path`
    fn last_message(&self, path: &str) -> Result<Option<String>>;
}

/// Git implementation of RepositoryQuery, running the `git` executable
/// in the current directory.
#[derive(Debug, Clone)]
pub struct GitRepository {
    program: String,
}

impl GitRepository {
    /// Create a repository view using the given git executable
    pub fn new(program: impl Into<String>) -> Self {
        GitRepository {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run git with `args`, returning its output only if it exited successfully
    fn run(&self, args: &[&str]) -> Result<Option<Output>> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| KeywordError::ToolInvocation {
                program: self.program.clone(),
                source: e,
            })?;

        if output.status.success() {
            Ok(Some(output))
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                program = %self.program,
                ?args,
                status = %output.status,
                stderr = %stderr.trim(),
                "git query failed"
            );
            Ok(None)
        }
    }

    /// `git log -1` for `path` with the given pretty format, first line only
    fn last_commit_field(&self, path: &str, format: &str) -> Result<Option<String>> {
        let pretty = format!("--pretty=format:{}", format);
        let output = self.run(&["log", pretty.as_str(), "-1", "--", path])?;
        Ok(output.and_then(|o| first_line(&o.stdout)))
    }
}

impl RepositoryQuery for GitRepository {
    fn branch(&self) -> Result<Option<String>> {
        let output = self.run(&["symbolic-ref", "HEAD"])?;
        Ok(output
            .and_then(|o| first_line(&o.stdout))
            .map(|full| short_branch_name(&full).to_string()))
    }

    fn revision_count(&self, path: &str) -> Result<Option<usize>> {
        let output = self.run(&["log", "--pretty=oneline", "--", path])?;
        Ok(output.map(|o| count_lines(&o.stdout)))
    }

    fn last_author(&self, path: &str) -> Result<Option<String>> {
        self.last_commit_field(path, "%aN - <%aE>")
    }

    fn last_date(&self, path: &str) -> Result<Option<String>> {
        self.last_commit_field(path, "%cd")
    }

    fn last_id(&self, path: &str) -> Result<Option<String>> {
        self.last_commit_field(path, "%H")
    }

    fn last_message(&self, path: &str) -> Result<Option<String>> {
        self.last_commit_field(path, "%s")
    }
}

/// First line of command output without its line ending, None when blank
fn first_line(stdout: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(stdout);
    let line = text.lines().next()?.trim_end();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

fn count_lines(stdout: &[u8]) -> usize {
    stdout
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .count()
}

/// `refs/heads/feature/x` -> `feature/x`
fn short_branch_name(full: &str) -> &str {
    full.strip_prefix("refs/heads/").unwrap_or(full)
}
