use semver::Version;

use crate::error::{RelverError, Result};

/// Version bump decision derived from the commit history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

/// Parse the version portion of a release tag (e.g. "1.2.3" from "v1.2.3").
///
/// Only a bare `MAJOR.MINOR.PATCH` triple is accepted. Prerelease tags are
/// not supported; a tag carrying prerelease or build metadata is rejected
/// the same way as one that is not a version at all.
///
/// # Returns
/// * `Ok(Version)` - the parsed release version
/// * `Err(TagNotSemVer)` - if `text` is not a well-formed triple
pub fn parse_release_version(text: &str) -> Result<Version> {
    let version =
        Version::parse(text.trim()).map_err(|_| RelverError::tag_not_semver(text.trim()))?;

    if !version.pre.is_empty() || !version.build.is_empty() {
        return Err(RelverError::tag_not_semver(text.trim()));
    }

    Ok(version)
}

/// Apply a bump to a version.
///
/// Increments the selected component, zeroes every component to its right
/// and clears prerelease/build metadata:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
pub fn apply_bump(version: &Version, bump: VersionBump) -> Version {
    match bump {
        VersionBump::Major => Version::new(version.major + 1, 0, 0),
        VersionBump::Minor => Version::new(version.major, version.minor + 1, 0),
        VersionBump::Patch => Version::new(version.major, version.minor, version.patch + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_version() {
        let v = parse_release_version("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_release_version_trims_whitespace() {
        let v = parse_release_version("1.2.3\n").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_release_version_invalid() {
        assert!(parse_release_version("1.2").is_err());
        assert!(parse_release_version("not-a-version").is_err());
        assert!(parse_release_version("").is_err());
    }

    #[test]
    fn test_parse_release_version_rejects_prerelease_and_build() {
        assert!(parse_release_version("1.2.3-rc.1").is_err());
        assert!(parse_release_version("1.2.3+5.abc.clean").is_err());
    }

    #[test]
    fn test_apply_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(apply_bump(&v, VersionBump::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_apply_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(apply_bump(&v, VersionBump::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_apply_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(apply_bump(&v, VersionBump::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_apply_bump_clears_metadata() {
        let v = Version::parse("1.2.3+12.2dfee1f.dirty").unwrap();
        let bumped = apply_bump(&v, VersionBump::Patch);
        assert!(bumped.build.is_empty());
        assert_eq!(bumped.to_string(), "1.2.4");
    }
}
