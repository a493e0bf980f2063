//! Pure formatting and reporting for the command line.
//!
//! Rendering functions are pure and testable; the `display_*` functions
//! only print. The library core never calls into this module.

use console::style;

use crate::analyzer::ChangelogGroup;

/// Print a report line: `relver: <topic>: <message>`
pub fn display_report(topic: &str, message: &str) {
    println!("{} {}: {}", style("relver:").dim(), style(topic).bold(), message);
}

/// Print an error message in red to stderr
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("relver: ERROR:").red().bold(), message);
}

/// Render a grouped changelog as text.
///
/// One block per non-empty category:
///
/// ```text
/// feat:
///  - BREAKING: [scope] summary (abcdef12)
/// ```
pub fn render_changelog(groups: &ChangelogGroup) -> String {
    let mut out = String::new();
    for (category, entries) in groups.iter() {
        if entries.is_empty() {
            continue;
        }
        out.push_str(category);
        out.push_str(":\n");
        for entry in entries {
            let breaking = if entry.breaking { "BREAKING: " } else { "" };
            let scope = entry
                .scope
                .as_deref()
                .map(|scope| format!("[{}] ", scope))
                .unwrap_or_default();
            out.push_str(&format!(
                " - {}{}{} ({})\n",
                breaking, scope, entry.summary, entry.short_hash
            ));
        }
        out.push('\n');
    }
    out
}

/// Render the per-category commit-count summary, e.g.
/// `2 feat commit(s), 1 fix commit(s)`.
pub fn render_summary(groups: &ChangelogGroup) -> String {
    groups
        .iter()
        .map(|(category, entries)| format!("{} {} commit(s)", entries.len(), category))
        .collect::<Vec<_>>()
        .join(", ")
}
