use semver::Version;

use crate::error::{RelverError, Result};
use crate::git::GitQuery;

/// Mock [GitQuery] for testing without a real repository.
///
/// Queries answer from canned text, so parser and pipeline behavior can be
/// exercised deterministically. Log entries are synthesized with the same
/// hash/length framing the real tool produces.
pub struct MockGit {
    describe: String,
    short_hash: Option<String>,
    commit_count: u64,
    dirty: bool,
    log: String,
}

impl MockGit {
    /// Create a mock of an untagged repository with no commits logged
    pub fn new() -> Self {
        MockGit {
            describe: "fatal: No names found, cannot describe anything.\n".to_string(),
            short_hash: Some("0000000".to_string()),
            commit_count: 0,
            dirty: false,
            log: String::new(),
        }
    }

    /// Set the raw describe output (grammar text or diagnostic)
    pub fn set_describe(&mut self, raw: impl Into<String>) {
        self.describe = raw.into();
    }

    /// Set the fallback primitives returned when no tag exists
    pub fn set_fallback(&mut self, commit_count: u64, short_hash: impl Into<String>) {
        self.commit_count = commit_count;
        self.short_hash = Some(short_hash.into());
    }

    /// Make the fallback hash query fail as it does on a commitless repository
    pub fn set_empty_repository(&mut self) {
        self.short_hash = None;
        self.commit_count = 0;
        self.log.clear();
    }

    /// Set the working tree dirtiness
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Append a commit to the canned log, newest entries first.
    ///
    /// Builds the `commit <hash>` / `log size <N>` framing around an
    /// author/date header and the indented message, byte-for-byte like
    /// `git log --no-decorate --log-size`.
    pub fn push_log_entry(&mut self, hash: &str, message: &str) {
        let indented: String = message
            .lines()
            .map(|line| {
                if line.is_empty() {
                    "\n".to_string()
                } else {
                    format!("    {}\n", line)
                }
            })
            .collect();
        let body = format!(
            "Author: A U Thor <author@example.com>\nDate:   Thu Aug 6 10:00:00 2026 +0000\n\n{}",
            indented
        );
        self.log
            .push_str(&format!("commit {}\nlog size {}\n{}\n", hash, body.len(), body));
    }

    /// Replace the canned log wholesale (for malformed-framing tests)
    pub fn set_raw_log(&mut self, raw: impl Into<String>) {
        self.log = raw.into();
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitQuery for MockGit {
    fn describe(&self) -> Result<String> {
        Ok(self.describe.clone())
    }

    fn short_hash(&self) -> Result<String> {
        self.short_hash
            .clone()
            .ok_or(RelverError::RepositoryEmpty)
    }

    fn commit_count(&self) -> Result<u64> {
        Ok(self.commit_count)
    }

    fn is_dirty(&self) -> Result<bool> {
        Ok(self.dirty)
    }

    fn log(&self, _since: Option<&Version>) -> Result<String> {
        Ok(self.log.clone())
    }
}
