use regex::Regex;
use semver::Version;

use crate::domain::version::parse_release_version;
use crate::error::{RelverError, Result};

/// Diagnostics git emits when no version tag can describe HEAD
const NO_TAG_DIAGNOSTICS: [&str; 3] = ["no names found", "no tags can describe", "cannot describe"];

/// Marker appended by `--broken` when the working tree is corrupt
const BROKEN_MARKER: &str = "-broken";

/// Structured description of HEAD's position relative to the nearest
/// version tag.
///
/// When `tag_found` is false, `base` is `0.0.0` and the count/hash come
/// from the fallback queries (total commit count, current short hash)
/// instead of the tag-relative distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeResult {
    /// Version of the nearest tag, or `0.0.0` when no tag exists
    pub base: Version,
    pub commits_since_tag: Option<u64>,
    pub short_hash: Option<String>,
    pub dirty: bool,
    pub tag_found: bool,
}

impl DescribeResult {
    /// Build the result for a repository with no version tag yet
    pub fn untagged(commit_count: u64, short_hash: impl Into<String>, dirty: bool) -> Self {
        DescribeResult {
            base: Version::new(0, 0, 0),
            commits_since_tag: Some(commit_count),
            short_hash: Some(short_hash.into()),
            dirty,
            tag_found: false,
        }
    }

    /// Compose the canonical version string for HEAD.
    ///
    /// | state | output |
    /// |---|---|
    /// | on tag, clean | `MAJOR.MINOR.PATCH` |
    /// | on tag, dirty | `MAJOR.MINOR.PATCH+0.dirty` |
    /// | N commits past tag | `MAJOR.MINOR.PATCH+N.<hash>.clean\|dirty` |
    /// | no tag | `0.0.0+<count>.<hash>.clean\|dirty` |
    ///
    /// A combination outside the table (a count without a hash, an
    /// untagged result missing its fallback data) is a contradiction in
    /// the upstream query and raises `UnexpectedOutput` instead of
    /// guessing.
    pub fn compose(&self) -> Result<String> {
        if !self.tag_found && (self.commits_since_tag.is_none() || self.short_hash.is_none()) {
            return Err(RelverError::unexpected(
                "untagged describe without fallback commit data",
            ));
        }

        match (self.commits_since_tag, self.short_hash.as_deref(), self.dirty) {
            (Some(count), Some(hash), dirty) => Ok(format!(
                "{}+{}.{}.{}",
                self.base,
                count,
                hash,
                if dirty { "dirty" } else { "clean" }
            )),
            (Some(_), None, _) => Err(RelverError::unexpected(
                "commit count reported without a commit hash",
            )),
            (None, Some(_), _) => Err(RelverError::unexpected(
                "commit hash reported without a commit count",
            )),
            (None, None, true) => Ok(format!("{}+0.dirty", self.base)),
            (None, None, false) => Ok(self.base.to_string()),
        }
    }
}

/// Whether raw describe output is the "no tag matches" diagnostic rather
/// than a describe string.
pub fn is_no_tag_diagnostic(raw: &str) -> bool {
    let lowered = raw.to_lowercase();
    NO_TAG_DIAGNOSTICS
        .iter()
        .any(|diagnostic| lowered.contains(diagnostic))
}

/// Parse raw `git describe` output.
///
/// The expected grammar is `vMAJOR.MINOR.PATCH(-N-g<hash>)?(-dirty)?`.
///
/// # Returns
/// * `Ok(Some(DescribeResult))` - a tag describes HEAD
/// * `Ok(None)` - the output is a no-tag diagnostic; the caller must fill
///   in the fallback queries
/// * `Err(RepositoryBroken)` - the broken-tree marker is present (checked
///   before any other parsing)
/// * `Err(TagNotSemVer)` - a tag was found but its version portion is not
///   a well-formed `MAJOR.MINOR.PATCH`
pub fn parse(raw: &str) -> Result<Option<DescribeResult>> {
    if raw.contains(BROKEN_MARKER) {
        return Err(RelverError::RepositoryBroken);
    }

    if is_no_tag_diagnostic(raw) {
        return Ok(None);
    }

    let captures = Regex::new(r"([0-9]+\.[0-9]+\.[0-9]+)(?:-([0-9]+))?(?:-g([0-9a-f]+))?(?:-(dirty))?")
        .ok()
        .and_then(|re| re.captures(raw))
        .ok_or_else(|| RelverError::tag_not_semver(raw.trim()))?;

    let base = parse_release_version(&captures[1])?;

    let commits_since_tag = match captures.get(2) {
        Some(m) => Some(
            m.as_str()
                .parse::<u64>()
                .map_err(|_| RelverError::unexpected("commit count is not a number"))?,
        ),
        None => None,
    };
    let short_hash = captures.get(3).map(|m| m.as_str().to_string());
    let dirty = captures.get(4).is_some();

    Ok(Some(DescribeResult {
        base,
        commits_since_tag,
        short_hash,
        dirty,
        tag_found: true,
    }))
}
