use regex::Regex;

use crate::error::{RelverError, Result};

/// Footer tokens that force a commit to count as a breaking change
const BREAKING_MARKERS: [&str; 2] = ["BREAKING CHANGE", "BREAKING-CHANGE"];

/// Structured record of one conventional commit.
///
/// `breaking` is true when either the subject carries a `!` before the
/// colon or the body contains a `BREAKING CHANGE` / `BREAKING-CHANGE`
/// marker line. The type token is normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full commit hash
    pub hash: String,
    pub r#type: String,
    pub scope: Option<String>,
    pub breaking: bool,
    pub summary: String,
    pub description: Option<String>,
}

impl CommitRecord {
    /// Parse one framed log entry body into a commit record.
    ///
    /// The entry is the size-prefixed blob from `git log --log-size`:
    /// author/date header lines, a blank line, then the indented message.
    /// The first message line must match the conventional commits subject
    /// grammar `type(scope)?!?: summary`; anything else is fatal, because a
    /// miscounted commit corrupts the version-bump decision.
    ///
    /// # Arguments
    /// * `hash` - full hash of the commit this entry belongs to
    /// * `entry` - the raw entry body, exactly as framed by git
    ///
    /// # Returns
    /// * `Ok(CommitRecord)` - the parsed record
    /// * `Err(NotConventional)` - if the subject fails the grammar
    pub fn from_log_entry(hash: impl Into<String>, entry: &str) -> Result<Self> {
        let hash = hash.into();
        let mut lines = entry.lines();

        // discard the author/date header up to the first blank line
        for line in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
        }

        let subject = lines
            .next()
            .map(str::trim)
            .ok_or_else(|| RelverError::not_conventional(hash.clone()))?;

        let captures = Regex::new(r"^([a-zA-Z0-9._-]+)(?:\(([a-zA-Z0-9._-]+)\))?(!)?:\s*(.+)$")
            .ok()
            .and_then(|re| re.captures(subject))
            .ok_or_else(|| RelverError::not_conventional(hash.clone()))?;

        let r#type = captures
            .get(1)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        let scope = captures.get(2).map(|m| m.as_str().to_string());
        let bang = captures.get(3).is_some();
        let summary = captures
            .get(4)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        if summary.is_empty() {
            return Err(RelverError::not_conventional(hash));
        }

        // rest of the message with line-leading indentation stripped
        let description = lines
            .map(str::trim_start)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        let breaking = bang || contains_breaking_marker(&description);

        Ok(CommitRecord {
            hash,
            r#type,
            scope,
            breaking,
            summary,
            description: if description.is_empty() {
                None
            } else {
                Some(description)
            },
        })
    }
}

fn contains_breaking_marker(description: &str) -> bool {
    description
        .lines()
        .any(|line| BREAKING_MARKERS.iter().any(|marker| line.starts_with(marker)))
}
