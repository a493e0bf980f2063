//! Commit-log parsing over the explicit `--log-size` framing.
//!
//! Each commit arrives as `commit <hash>`, `log size <N>`, then exactly N
//! bytes of entry body. Splitting on the declared sizes means message
//! bodies containing blank lines are read exactly; blank-line heuristics
//! are never used.

use crate::domain::CommitRecord;
use crate::error::{RelverError, Result};

/// Parse raw `git log --no-decorate --log-size` output into an ordered
/// change set, newest commit first.
///
/// # Returns
/// * `Ok(Vec<CommitRecord>)` - one record per framed entry; empty input
///   yields an empty set
/// * `Err(UnexpectedOutput)` - the framing itself is malformed (missing
///   headers, non-hex hash, entry shorter than its declared size)
/// * `Err(NotConventional)` - an entry's subject fails the conventional
///   commits grammar; identifies the offending commit and is never
///   silently skipped
pub fn parse(raw: &str) -> Result<Vec<CommitRecord>> {
    let mut commits = Vec::new();
    let mut input = raw;

    while let Some(line) = next_line(&mut input) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            // separator between framed entries
            continue;
        }

        let hash = trimmed
            .strip_prefix("commit ")
            .map(str::trim)
            .ok_or_else(|| {
                RelverError::unexpected(format!("expected a commit header, got '{}'", trimmed))
            })?;
        if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RelverError::unexpected(format!(
                "'{}' is not a commit hash",
                hash
            )));
        }

        let size_line = next_line(&mut input)
            .ok_or_else(|| RelverError::unexpected("log ended before a log size header"))?;
        let size = size_line
            .trim()
            .strip_prefix("log size ")
            .and_then(|digits| digits.trim().parse::<usize>().ok())
            .ok_or_else(|| {
                RelverError::unexpected(format!(
                    "expected a log size header, got '{}'",
                    size_line.trim()
                ))
            })?;

        let entry = input.get(..size).ok_or_else(|| {
            RelverError::unexpected("log entry does not match its declared size")
        })?;
        input = input.get(size..).unwrap_or("");

        commits.push(CommitRecord::from_log_entry(hash, entry)?);
    }

    Ok(commits)
}

fn next_line<'a>(input: &mut &'a str) -> Option<&'a str> {
    if input.is_empty() {
        return None;
    }
    match input.find('\n') {
        Some(pos) => {
            let line = &input[..pos];
            *input = &input[pos + 1..];
            Some(line)
        }
        None => {
            let line = *input;
            *input = "";
            Some(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{GitQuery, MockGit};

    fn framed(entries: &[(&str, &str)]) -> String {
        let mut mock = MockGit::new();
        for (hash, message) in entries {
            mock.push_log_entry(hash, message);
        }
        mock.log(None).unwrap()
    }

    #[test]
    fn test_parse_empty_log() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_single_commit() {
        let raw = framed(&[("1f2e3d4c", "feat(core): add parser")]);
        let commits = parse(&raw).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, "1f2e3d4c");
        assert_eq!(commits[0].r#type, "feat");
        assert_eq!(commits[0].scope.as_deref(), Some("core"));
        assert_eq!(commits[0].summary, "add parser");
    }

    #[test]
    fn test_parse_preserves_newest_first_order() {
        let raw = framed(&[("aaaa", "fix: second"), ("bbbb", "feat: first")]);
        let commits = parse(&raw).unwrap();
        assert_eq!(commits[0].hash, "aaaa");
        assert_eq!(commits[1].hash, "bbbb");
    }

    #[test]
    fn test_parse_multi_paragraph_body() {
        // bodies with blank lines must not break the framing
        let raw = framed(&[
            ("aaaa", "feat: add thing\n\nfirst paragraph\n\nsecond paragraph"),
            ("bbbb", "fix: follow-up"),
        ]);
        let commits = parse(&raw).unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(
            commits[0].description.as_deref(),
            Some("first paragraph\n\nsecond paragraph")
        );
        assert_eq!(commits[1].hash, "bbbb");
    }

    #[test]
    fn test_parse_breaking_footer_in_framed_body() {
        let raw = framed(&[("cccc", "fix: rename\n\nBREAKING CHANGE: renamed field")]);
        let commits = parse(&raw).unwrap();
        assert!(commits[0].breaking);
    }

    #[test]
    fn test_malformed_subject_is_fatal_with_hash() {
        let raw = framed(&[("feedbeef", "oops no colon here")]);
        match parse(&raw).unwrap_err() {
            RelverError::NotConventional { hash } => assert_eq!(hash, "feedbeef"),
            other => panic!("expected NotConventional, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_size_header_is_unexpected() {
        let err = parse("commit aaaa\nAuthor: nope\n").unwrap_err();
        assert!(matches!(err, RelverError::UnexpectedOutput(_)));
    }

    #[test]
    fn test_non_hex_hash_is_unexpected() {
        let err = parse("commit not-a-hash\nlog size 4\nabcd").unwrap_err();
        assert!(matches!(err, RelverError::UnexpectedOutput(_)));
    }

    #[test]
    fn test_truncated_entry_is_unexpected() {
        let err = parse("commit aaaa\nlog size 9999\nshort").unwrap_err();
        assert!(matches!(err, RelverError::UnexpectedOutput(_)));
    }

    #[test]
    fn test_garbage_header_is_unexpected() {
        let err = parse("totally unrelated text\n").unwrap_err();
        assert!(matches!(err, RelverError::UnexpectedOutput(_)));
    }
}
