//! Git query abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries relver needs, allowing for multiple implementations including
//! the real `git` executable and a mock implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [GitQuery] trait. The concrete
//! implementations include:
//!
//! - [cli::GitCli]: spawns the `git` executable and captures its output
//! - [mock::MockGit]: deterministic canned-text implementation for tests
//!
//! Most code should depend on the [GitQuery] trait rather than concrete
//! implementations; [crate::release::ReleaseStatus] is generic over it.
//!
//! Every query is a blocking call with no timeout; a hung git process
//! blocks the whole computation. Queries never mutate repository state,
//! but no locking is provided either - a concurrent history rewrite by
//! another process is a caller-level race.

pub mod cli;
pub mod mock;

pub use cli::GitCli;
pub use mock::MockGit;

use semver::Version;

use crate::error::Result;

/// Read-only query capability against a git repository.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map the
/// tool's failure modes to the appropriate [crate::error::RelverError]
/// variants instead of surfacing raw exit codes.
pub trait GitQuery: Send + Sync {
    /// Raw output of `git describe --tags --match "v[0-9]*" --dirty --broken`.
    ///
    /// The returned text is either the describe grammar
    /// `vMAJOR.MINOR.PATCH(-N-g<hash>)?(-dirty)?` or the tool's own
    /// "no names found" / "cannot describe" diagnostic, surfaced verbatim
    /// so the parser can decide to take the fallback path.
    ///
    /// # Errors
    /// * `GitMissing` - the git executable is unavailable
    /// * `RepositoryNotFound` - the working directory is not inside a
    ///   repository
    /// * `UnexpectedOutput` - any other failure diagnostic
    fn describe(&self) -> Result<String>;

    /// Short hash of HEAD (`git rev-parse --short HEAD`).
    ///
    /// Fallback primitive, used only when no version tag exists yet.
    ///
    /// # Errors
    /// * `RepositoryEmpty` - the repository has no commits, detected from
    ///   this query's own failure diagnostic
    fn short_hash(&self) -> Result<String>;

    /// Total number of commits reachable from HEAD
    /// (`git rev-list --count HEAD`).
    fn commit_count(&self) -> Result<u64>;

    /// Whether the working tree has uncommitted changes
    /// (`git diff --quiet`, non-zero exit means dirty).
    fn is_dirty(&self) -> Result<bool>;

    /// Raw output of `git log --no-decorate --log-size [v<since>..]`.
    ///
    /// The output frames each commit as `commit <hash>`, `log size <N>`
    /// and exactly N bytes of entry body, so message bodies containing
    /// blank lines can be read exactly without blank-line heuristics.
    ///
    /// # Arguments
    /// * `since` - limit the log to commits after the tag `v<since>`;
    ///   `None` returns the whole history
    fn log(&self, since: Option<&Version>) -> Result<String>;
}
