use crate::domain::CommitRecord;

/// One changelog line: a commit annotated for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// Hash truncated to 8 characters for display
    pub short_hash: String,
    pub scope: Option<String>,
    pub summary: String,
    pub breaking: bool,
}

impl ChangelogEntry {
    fn from_record(record: &CommitRecord) -> Self {
        ChangelogEntry {
            short_hash: record.hash.chars().take(8).collect(),
            scope: record.scope.clone(),
            summary: record.summary.clone(),
            breaking: record.breaking,
        }
    }
}

/// Changes grouped by commit type, in the caller's requested category
/// order.
///
/// A requested category with no matching commits is present and empty, so
/// callers can distinguish "asked but none found" from "not asked".
/// Within a category, entries keep the change set's newest-first order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangelogGroup {
    groups: Vec<(String, Vec<ChangelogEntry>)>,
}

impl ChangelogGroup {
    /// Group a change set by the requested categories.
    ///
    /// Duplicate categories in the request collapse to the first mention;
    /// commits whose type was not requested are simply excluded.
    pub fn group(commits: &[CommitRecord], categories: &[String]) -> Self {
        let mut groups: Vec<(String, Vec<ChangelogEntry>)> = Vec::new();
        for category in categories {
            if groups.iter().any(|(name, _)| name == category) {
                continue;
            }
            let entries = commits
                .iter()
                .filter(|record| &record.r#type == category)
                .map(ChangelogEntry::from_record)
                .collect();
            groups.push((category.clone(), entries));
        }
        ChangelogGroup { groups }
    }

    /// Entries for one category; `None` when the category was never asked for
    pub fn get(&self, category: &str) -> Option<&[ChangelogEntry]> {
        self.groups
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Iterate categories in requested order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ChangelogEntry])> {
        self.groups
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// True when no requested category matched any commit
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|(_, entries)| entries.is_empty())
    }
}
