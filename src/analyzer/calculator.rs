use semver::Version;

use crate::domain::version::{apply_bump, VersionBump};
use crate::domain::CommitRecord;

/// Decide the bump the commit history calls for, if any.
///
/// Tiered and existence-based - only the presence of a classification
/// matters, never how recent it is, so the result is independent of the
/// commit order:
/// 1. any breaking change bumps major, or minor while `latest.major == 0`
///    (a 0.x project is inherently unstable, so breaking changes stay
///    within the 0.x line);
/// 2. otherwise any `feat` commit bumps minor;
/// 3. otherwise any `fix` commit bumps patch;
/// 4. otherwise no release is needed.
pub fn decide_bump(latest: &Version, commits: &[CommitRecord]) -> Option<VersionBump> {
    if commits.iter().any(|commit| commit.breaking) {
        if latest.major == 0 {
            return Some(VersionBump::Minor);
        }
        return Some(VersionBump::Major);
    }

    if commits.iter().any(|commit| commit.r#type == "feat") {
        return Some(VersionBump::Minor);
    }

    if commits.iter().any(|commit| commit.r#type == "fix") {
        return Some(VersionBump::Patch);
    }

    None
}

/// Compute the next release version from the latest released version and
/// the commits since it. Returns `latest` unchanged when no bump applies.
pub fn next_version(latest: &Version, commits: &[CommitRecord]) -> Version {
    match decide_bump(latest, commits) {
        Some(bump) => apply_bump(latest, bump),
        None => latest.clone(),
    }
}
