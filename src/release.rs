//! Release-state derivation over an injected git query capability.
//!
//! Wires the pipeline: raw describe text is parsed and composed into the
//! HEAD version string, and raw log text is parsed into a change set that
//! feeds the next-version calculation and the changelog. Every value is
//! derived fresh per call from the current repository state; nothing is
//! cached or persisted here.

use semver::Version;

use crate::analyzer::{self, ChangelogGroup};
use crate::domain::{describe, CommitRecord, DescribeResult};
use crate::error::Result;
use crate::git::GitQuery;
use crate::history;

/// Derives versions and changelogs for the repository behind a
/// [GitQuery].
///
/// Commits must follow the Conventional Commits specification and release
/// tags must be `v` followed by a bare `MAJOR.MINOR.PATCH`. Prerelease
/// version tags are not supported.
pub struct ReleaseStatus<Q: GitQuery> {
    git: Q,
}

impl<Q: GitQuery> ReleaseStatus<Q> {
    /// Wrap a git query capability
    pub fn new(git: Q) -> Self {
        ReleaseStatus { git }
    }

    /// Describe HEAD's position relative to the nearest version tag.
    ///
    /// When no tag matches, the fallback primitives (total commit count,
    /// current short hash, dirtiness) fill in an untagged result; a
    /// commitless repository surfaces as `RepositoryEmpty` from the
    /// fallback hash query.
    pub fn describe(&self) -> Result<DescribeResult> {
        let raw = self.git.describe()?;
        match describe::parse(&raw)? {
            Some(result) => Ok(result),
            None => {
                let short_hash = self.git.short_hash()?;
                let commit_count = self.git.commit_count()?;
                let dirty = self.git.is_dirty()?;
                Ok(DescribeResult::untagged(commit_count, short_hash, dirty))
            }
        }
    }

    /// Version string of the checked-out commit (HEAD).
    ///
    /// On a clean version-tagged commit this is the bare version;
    /// otherwise a local dev string, e.g. `1.1.0+12.2dfee1f.dirty` or
    /// `1.1.0+0.dirty` for local changes on a tagged commit.
    pub fn head(&self) -> Result<String> {
        self.describe()?.compose()
    }

    /// The latest released version - the nearest version tag's triple, or
    /// `0.0.0` when no release exists yet.
    pub fn latest(&self) -> Result<Version> {
        Ok(self.describe()?.base)
    }

    /// The change set since the latest release, newest commit first.
    ///
    /// With no release tag the whole history is parsed. Tag presence is
    /// taken from the describe result, so a repository genuinely tagged
    /// `v0.0.0` still scopes the log to commits after that tag.
    pub fn commits(&self) -> Result<Vec<CommitRecord>> {
        let described = self.describe()?;
        self.commits_since(&described)
    }

    /// The next release version based on the commit history and the
    /// latest released version. Equal to [Self::latest] when nothing in
    /// the history calls for a release.
    pub fn next(&self) -> Result<Version> {
        let described = self.describe()?;
        let commits = self.commits_since(&described)?;
        Ok(analyzer::next_version(&described.base, &commits))
    }

    /// The changes since the latest release grouped by commit type.
    ///
    /// Only the requested `categories` are included; a requested category
    /// with no commits is present and empty.
    pub fn changelog(&self, categories: &[String]) -> Result<ChangelogGroup> {
        let commits = self.commits()?;
        Ok(ChangelogGroup::group(&commits, categories))
    }

    fn commits_since(&self, described: &DescribeResult) -> Result<Vec<CommitRecord>> {
        let since = if described.tag_found {
            Some(&described.base)
        } else {
            None
        };
        let raw = self.git.log(since)?;
        history::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelverError;
    use crate::git::MockGit;

    #[test]
    fn test_head_on_clean_tagged_commit() {
        let mut git = MockGit::new();
        git.set_describe("v2.0.1\n");
        let status = ReleaseStatus::new(git);
        assert_eq!(status.head().unwrap(), "2.0.1");
    }

    #[test]
    fn test_head_untagged_repository_uses_fallback() {
        let mut git = MockGit::new();
        git.set_fallback(12, "2dfee1f");
        git.set_dirty(true);
        let status = ReleaseStatus::new(git);
        assert_eq!(status.head().unwrap(), "0.0.0+12.2dfee1f.dirty");
    }

    #[test]
    fn test_head_empty_repository() {
        let mut git = MockGit::new();
        git.set_empty_repository();
        let status = ReleaseStatus::new(git);
        assert!(matches!(
            status.head().unwrap_err(),
            RelverError::RepositoryEmpty
        ));
    }

    #[test]
    fn test_latest_is_describe_base() {
        let mut git = MockGit::new();
        git.set_describe("v1.4.2-7-gabc1234\n");
        let status = ReleaseStatus::new(git);
        assert_eq!(status.latest().unwrap(), Version::new(1, 4, 2));
    }

    #[test]
    fn test_next_from_history() {
        let mut git = MockGit::new();
        git.set_describe("v1.0.0-2-gabc1234\n");
        git.push_log_entry("abc1234", "feat: add endpoint");
        git.push_log_entry("def5678", "fix: handle nulls");
        let status = ReleaseStatus::new(git);
        assert_eq!(status.next().unwrap(), Version::new(1, 1, 0));
    }

    #[test]
    fn test_changelog_groups_requested_types() {
        let mut git = MockGit::new();
        git.set_describe("v1.0.0-3-gabc1234\n");
        git.push_log_entry("abc1234", "feat: add x");
        git.push_log_entry("def5678", "fix: fix y");
        git.push_log_entry("0123abc", "chore: z");
        let status = ReleaseStatus::new(git);

        let groups = status
            .changelog(&["feat".to_string(), "fix".to_string()])
            .unwrap();
        assert_eq!(groups.get("feat").unwrap()[0].summary, "add x");
        assert_eq!(groups.get("fix").unwrap()[0].summary, "fix y");
        assert_eq!(groups.get("chore"), None);
    }
}
