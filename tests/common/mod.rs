#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(deprecated)]
pub fn keywords_cmd() -> Command {
    let mut cmd = Command::cargo_bin("git-keywords").unwrap();
    cmd.env_remove("GIT_KEYWORDS_GIT");
    cmd.env_remove("GIT_KEYWORDS_ON_TOOL_ERROR");
    cmd.env_remove("GIT_KEYWORDS_CONFIG");
    cmd.env_remove("GIT_KEYWORDS_LOG");
    cmd
}

/// Stand-in for git answering every metadata query for branch `main` with 3 revisions
pub const FAKE_GIT: &str = r#"#!/bin/sh
case "$1" in
  symbolic-ref) echo "refs/heads/main" ;;
  log)
    case "$2" in
      --pretty=oneline) printf 'c3 three\nb2 two\na1 one\n' ;;
      "--pretty=format:%aN - <%aE>") printf 'Ada Lovelace - <ada@example.com>' ;;
      --pretty=format:%cd) printf 'Mon Jan 6 10:00:00 2025 +0100' ;;
      --pretty=format:%H) printf '0123456789abcdef0123456789abcdef01234567' ;;
      --pretty=format:%s) printf 'Add keyword filter' ;;
      *) exit 1 ;;
    esac ;;
  *) exit 1 ;;
esac
"#;

/// Stand-in for git on a detached HEAD where every query fails
pub const FAILING_GIT: &str = "#!/bin/sh\necho 'fatal: not a git repository' >&2\nexit 128\n";

/// Write an executable script into `dir` and return its path
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, contents: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
