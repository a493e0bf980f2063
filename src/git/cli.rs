use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use semver::Version;

use crate::domain::describe;
use crate::error::{RelverError, Result};
use crate::git::GitQuery;

/// Diagnostics git emits when HEAD does not resolve to a commit yet
const EMPTY_REPOSITORY_DIAGNOSTICS: [&str; 2] = ["needed a single revision", "unknown revision"];

/// Real [GitQuery] implementation that spawns the `git` executable.
///
/// All queries run in the configured working directory and are read-only:
/// no refs are created, no state is written.
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    /// Create a query handle for the current working directory
    pub fn new() -> Self {
        GitCli {
            work_dir: PathBuf::from("."),
        }
    }

    /// Create a query handle for a specific directory
    pub fn in_dir<P: AsRef<Path>>(work_dir: P) -> Self {
        GitCli {
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    RelverError::GitMissing
                } else {
                    RelverError::Io(err)
                }
            })
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitQuery for GitCli {
    fn describe(&self) -> Result<String> {
        let output = self.run(&[
            "describe",
            "--tags",
            "--match",
            "v[0-9]*",
            "--dirty",
            "--broken",
        ])?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.to_lowercase().contains("not a git repository") {
            return Err(RelverError::RepositoryNotFound);
        }

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        // surface the no-tag diagnostic verbatim; the parser owns the
        // decision to take the fallback path
        if describe::is_no_tag_diagnostic(&stderr) {
            return Ok(stderr.into_owned());
        }

        Err(RelverError::unexpected(stderr.trim().to_string()))
    }

    fn short_hash(&self) -> Result<String> {
        let output = self.run(&["rev-parse", "--short", "HEAD"])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();
            if EMPTY_REPOSITORY_DIAGNOSTICS
                .iter()
                .any(|diagnostic| stderr.contains(diagnostic))
            {
                return Err(RelverError::RepositoryEmpty);
            }
            return Err(RelverError::unexpected(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn commit_count(&self) -> Result<u64> {
        let output = self.run(&["rev-list", "--count", "HEAD"])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RelverError::unexpected(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .trim()
            .parse::<u64>()
            .map_err(|_| RelverError::unexpected(format!("rev-list count: {}", stdout.trim())))
    }

    fn is_dirty(&self) -> Result<bool> {
        let output = self.run(&["diff", "--quiet"])?;
        Ok(!output.status.success())
    }

    fn log(&self, since: Option<&Version>) -> Result<String> {
        let range;
        let mut args = vec!["log", "--no-decorate", "--log-size"];
        if let Some(version) = since {
            range = format!("v{}..", version);
            args.push(&range);
        }

        // stderr is intentionally ignored: an empty repository produces an
        // empty log, which parses to an empty change set
        let output = self.run(&args)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
